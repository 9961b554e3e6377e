use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub class: &'static str,
    pub width: u32,
    pub height: u32,
}

/// The logo is served as-is from `assets/`, no resizing pipeline.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <img
            src="/assets/logo.svg"
            alt="CineTax"
            class={props.class}
            width={props.width.to_string()}
            height={props.height.to_string()}
            style="object-fit: contain;"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scrolled: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class={classes!("navbar", props.scrolled.then(|| "scrolled"))}>
            <div class="container">
                <Logo class="navbar-logo" width={200} height={75} />
                <a href="#hero-form" class="btn-cta">{"Falar com Especialista"}</a>
            </div>
        </nav>
    }
}
