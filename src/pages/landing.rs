use yew::prelude::*;

use crate::components::faq_list::FaqList;
use crate::components::footer::Footer;
use crate::components::lead_form::LeadFormCard;
use crate::components::navbar::Navbar;
use crate::scroll::{use_reveal, use_scrolled, RevealSet};
use crate::tracking::Tracker;

struct ValueCard {
    title: &'static str,
    desc: Html,
    rows: &'static [(&'static str, &'static str, bool)],
    total: Option<(&'static str, &'static str)>,
    note: (&'static str, &'static str),
    animation: &'static str,
}

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "🎯",
        "Tripla Vantagem Fiscal",
        "Dedução operacional (IRPJ + CSLL) + Abatimento direto no IR + Retorno potencial. \
         Economia combinada de até 40% da carga tributária total. É a única modalidade de investimento que oferece benefícios fiscais triplos.",
    ),
    (
        "💸",
        "Custo Real Zero",
        "Com a dedução operacional reduzindo o custo inicial e o abatimento do IR recuperando o investimento, o desembolso líquido pode ser ZERO. \
         Adicione o potencial de retorno da obra e você pode até ter lucro.",
    ),
    (
        "🚀",
        "ROI + ESG + Branding",
        "Além dos benefícios fiscais, você ganha participação nos lucros da obra, fortalece sua imagem ESG investindo em cultura, \
         e pode ter seu logo aparecendo nos créditos. Múltiplos ganhos em uma única estratégia.",
    ),
];

const STEPS: &[(&str, &str, &str)] = &[
    (
        "Escolha o Projeto",
        "Navegue por projetos audiovisuais aprovados pela Ancine e selecione aqueles que mais se alinham com sua estratégia.",
        "fade-in-left",
    ),
    (
        "Realize o Aporte",
        "Invista diretamente pela nossa plataforma digital, com total segurança e transparência em todo o processo.",
        "fade-in",
    ),
    (
        "Receba o Certificado",
        "Obtenha o CAV - Certificado de Investimento Audiovisual para abatimento direto no cálculo do seu IR.",
        "fade-in-right",
    ),
];

const TRUST_BADGES: &[&str] = &[
    "Conformidade CVM",
    "Aprovação Ancine",
    "Lei do Audiovisual",
    "Auditoria Contábil",
];

/// Classes for an element that fades in once its `data-reveal` key is seen.
fn reveal_classes(reveal: &RevealSet, key: &str, base: &'static str, animation: &'static str) -> Classes {
    classes!(base, animation, reveal.class(key))
}

fn section_header(reveal: &RevealSet, key: &'static str, eyebrow: &'static str, title: &'static str, desc: &'static str) -> Html {
    html! {
        <div class={reveal_classes(reveal, key, "section-header", "fade-in")} data-reveal={key}>
            <span class="section-eyebrow">{eyebrow}</span>
            <h2 class="section-title">{title}</h2>
            <p class="section-desc">{desc}</p>
        </div>
    }
}

fn value_cards() -> Vec<ValueCard> {
    vec![
        ValueCard {
            title: "Dedução Operacional",
            desc: html! { <>{"Reduz o lucro tributável em "}<strong>{"R$ 100.000"}</strong></> },
            rows: &[
                ("Economia IRPJ (15%)", "R$ 15.000", false),
                ("Economia CSLL (9%)", "R$ 9.000", false),
                ("IRPJ Adicional (10%)*", "~R$ 10.000", false),
            ],
            total: Some(("Subtotal", "R$ 34.000")),
            note: ("value-footnote", "*Sobre lucro superior a R$ 240k/ano"),
            animation: "fade-in-left",
        },
        ValueCard {
            title: "Abatimento Direto no IR",
            desc: html! { {"100% dedutível do Imposto de Renda devido"} },
            rows: &[
                ("Abatimento IR", "R$ 100.000", false),
                ("Limite máximo", "3% do IR devido", true),
            ],
            total: None,
            note: ("value-benefit", "✓ Valor que seria pago ao governo vai para cultura"),
            animation: "fade-in",
        },
        ValueCard {
            title: "Retorno Potencial",
            desc: html! { {"Participação nos lucros comerciais da obra"} },
            rows: &[
                ("Bilheteria", "Variável", false),
                ("Streaming", "Variável", false),
                ("Vendas internacionais", "Variável", false),
            ],
            total: None,
            note: ("value-benefit", "✓ ROI adicional potencial"),
            animation: "fade-in-right",
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub tracker: Tracker,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let scrolled = use_scrolled();
    let reveal = use_reveal();

    {
        let tracker = props.tracker.clone();
        use_effect_with_deps(
            move |_| {
                tracker.page_view();
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <Navbar {scrolled} />

            <section class="hero">
                <div class="grid-pattern"></div>
                <div class="container">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span>{"TaxTech para o Audiovisual"}</span>
                        </div>
                        <h1 class="hero-title">
                            {"Reduza sua Carga Tributária em até "}<span class="highlight">{"40%"}</span>{" Investindo em Cultura"}
                        </h1>
                        <p class="hero-subtitle">
                            {"Dedução operacional (IRPJ + CSLL) + Abatimento no IR + Retorno potencial. Com a CineTax, o custo real do seu investimento em CAV pode ser ZERO ou até negativo. Descubra o lucro escondido na sua declaração."}
                        </p>
                        <div class="hero-stats">
                            { for [("Até 40%", "Economia Tributária Total"), ("R$ 0", "Custo Real Líquido"), ("3X", "Vantagens Fiscais")]
                                .iter()
                                .map(|(value, label)| html! {
                                    <div class="stat-item">
                                        <div class="stat-value">{*value}</div>
                                        <div class="stat-label">{*label}</div>
                                    </div>
                                }) }
                        </div>
                    </div>
                    <LeadFormCard tracker={props.tracker.clone()} />
                </div>
            </section>

            <section class="value-proposition">
                <div class="container">
                    { section_header(&reveal, "value-header", "💰 O Lucro Escondido",
                        "Entenda o Valor Real do Investimento em CAV",
                        "Não é apenas dedução de IR. É uma estratégia fiscal completa que transforma impostos em investimento rentável.") }

                    <div class="value-example">
                        <div class="example-header">
                            <h3>{"Exemplo Prático: Investimento de R$ 100.000"}</h3>
                            <p>{"Veja como funciona a tripla vantagem fiscal"}</p>
                        </div>

                        <div class="value-breakdown">
                            { for value_cards().into_iter().enumerate().map(|(i, card)| {
                                let key = format!("value-card-{}", i + 1);
                                html! {
                                    <div class={reveal_classes(&reveal, &key, "value-card", card.animation)} data-reveal={key.clone()}>
                                        <div class="value-card-number">{i + 1}</div>
                                        <h4 class="value-card-title">{card.title}</h4>
                                        <p class="value-card-desc">{card.desc}</p>
                                        <div class="value-calculation">
                                            { for card.rows.iter().map(|(label, value, highlight)| html! {
                                                <div class={classes!("calc-item", highlight.then(|| "highlight"))}>
                                                    <span class="calc-label">{*label}</span>
                                                    <span class="calc-value">{*value}</span>
                                                </div>
                                            }) }
                                            { for card.total.map(|(label, value)| html! {
                                                <div class="calc-total">
                                                    <span class="calc-label">{label}</span>
                                                    <span class="calc-value gold">{value}</span>
                                                </div>
                                            }) }
                                        </div>
                                        <p class={card.note.0}>{card.note.1}</p>
                                    </div>
                                }
                            }) }
                        </div>

                        <div class="value-result">
                            <div class="result-box">
                                <div class="result-label">{"Custo Real Líquido"}</div>
                                <div class="result-value">{"R$ 66.000 a R$ 0"}</div>
                                <p class="result-desc">
                                    {"Após dedução operacional de ~R$ 34k, o investimento de R$ 100k passa a custar R$ 66k. Com o abatimento do IR, esse valor pode chegar a "}
                                    <strong>{"ZERO ou até ser NEGATIVO"}</strong>
                                    {" com o retorno potencial da obra."}
                                </p>
                            </div>
                            <div class="result-highlight">
                                <span class="highlight-icon">{"💡"}</span>
                                <p>
                                    <strong>{"Resultado:"}</strong>
                                    {" Você investe em cultura, ganha visibilidade ESG, e pode ter custo zero ou até lucro. Esse é o lucro escondido que poucos conhecem."}
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="benefits">
                <div class="container">
                    { section_header(&reveal, "benefits-header", "🎯 Vantagens Competitivas",
                        "Por que investir em CAV com a CineTax?",
                        "Não é apenas sobre pagar menos impostos. É sobre transformar obrigações fiscais em oportunidades de negócio.") }

                    <div class="benefits-grid">
                        { for BENEFITS.iter().enumerate().map(|(i, (icon, title, desc))| {
                            let key = format!("benefit-{}", i + 1);
                            html! {
                                <div class={classes!(reveal_classes(&reveal, &key, "benefit-card", "fade-in"), format!("delay-{}", i + 1))}
                                    data-reveal={key.clone()}>
                                    <div class="benefit-icon">{*icon}</div>
                                    <h3 class="benefit-title">{*title}</h3>
                                    <p class="benefit-desc">{*desc}</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="how-it-works">
                <div class="container">
                    { section_header(&reveal, "steps-header", "🚀 Processo Simples", "Como Funciona",
                        "Em apenas três passos, sua empresa já estará investindo no audiovisual brasileiro.") }

                    <div class="timeline">
                        { for STEPS.iter().enumerate().map(|(i, (title, desc, animation))| {
                            let key = format!("step-{}", i + 1);
                            html! {
                                <div class={reveal_classes(&reveal, &key, "timeline-step", *animation)} data-reveal={key.clone()}>
                                    <div class="step-number"><span>{i + 1}</span></div>
                                    <div class="step-content">
                                        <h4 class="step-title">{*title}</h4>
                                        <p class="step-desc">{*desc}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="trust">
                <div class="container">
                    <div class={reveal_classes(&reveal, "trust", "trust-content", "fade-in")} data-reveal="trust">
                        <div class="trust-icon">{"🛡️"}</div>
                        <h2 class="trust-title">{"Segurança Jurídica e Conformidade Total"}</h2>
                        <p class="trust-text">
                            {"A CineTax opera em total conformidade com a legislação brasileira, incluindo a Lei do Audiovisual (Lei nº 8.685/93), normativas da "}
                            <strong>{"CVM (Comissão de Valores Mobiliários)"}</strong>
                            {" e regulamentação da "}
                            <strong>{"ANCINE (Agência Nacional do Cinema)"}</strong>
                            {". Todos os projetos disponíveis em nossa plataforma passam por rigorosa análise de compliance antes de serem oferecidos aos investidores."}
                        </p>
                        <div class="trust-badges">
                            { for TRUST_BADGES.iter().map(|badge| html! {
                                <div class="trust-badge">
                                    <div class="trust-badge-icon">{"✓"}</div>
                                    <span class="trust-badge-text">{*badge}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="faq">
                <div class="container">
                    { section_header(&reveal, "faq-header", "❓ Dúvidas", "Perguntas Frequentes",
                        "Entenda tudo sobre o investimento em CAV e como sua empresa pode se beneficiar.") }
                    <FaqList />
                </div>
            </section>

            <section class="final-cta">
                <div class="container">
                    <h2 class="final-cta-title">{"Pronto para transformar seu IR em investimento cultural?"}</h2>
                    <p class="final-cta-text">
                        {"Junte-se às empresas que já descobriram o poder do audiovisual como estratégia fiscal."}
                    </p>
                    <a href="#hero-form" class="btn-final-cta">{"Quero Começar Agora"}</a>
                </div>
            </section>

            <Footer />
        </>
    }
}
