use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::navbar::Logo;

const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Plataforma", &["Como Funciona", "Projetos", "Simulador", "FAQ"]),
    ("Empresa", &["Sobre Nós", "Contato", "Blog", "Carreiras"]),
    ("Legal", &["Termos de Uso", "Política de Privacidade", "Compliance", "Regulamentação"]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <Logo class="footer-logo" width={180} height={68} />
                        <p class="footer-desc">
                            {"A TaxTech que conecta sua empresa ao universo audiovisual brasileiro, transformando impostos em investimento com propósito."}
                        </p>
                        <div class="footer-social">
                            <a href="#" class="social-link" aria-label="LinkedIn">{"in"}</a>
                            <a href="#" class="social-link" aria-label="Instagram">{"📷"}</a>
                            <a href="#" class="social-link" aria-label="Twitter">{"𝕏"}</a>
                        </div>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|(title, links)| html! {
                        <div class="footer-column">
                            <h4>{*title}</h4>
                            <ul class="footer-links">
                                { for links.iter().map(|link| html! { <li><a href="#">{*link}</a></li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <div class="footer-legal">
                        <p class="copyright">
                            {format!("© {} CineTax. Todos os direitos reservados.", year)}
                        </p>
                        <p class="legal-text">
                            {"Investimentos em CAV envolvem riscos. Retornos passados não são garantia de resultados futuros. \
                              A CineTax não presta consultoria tributária ou financeira. Consulte seu contador ou advogado \
                              antes de tomar decisões de investimento. Produtos sujeitos à aprovação da CVM e Ancine."}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
