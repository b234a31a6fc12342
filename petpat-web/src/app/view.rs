use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::calculator::CalculatorPage;
use crate::pages::home::HomePage;
use crate::pages::method::MethodPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use petpat_core::{Lang, WeightUnit};
use yew::prelude::*;

/// Everything the shell needs to draw one frame.
#[derive(Clone, PartialEq)]
pub struct ShellProps {
    pub route: Route,
    pub lang: Lang,
    pub weight_unit: WeightUnit,
    pub on_navigate: Callback<Route>,
    pub on_lang_change: Callback<Lang>,
    pub on_unit_change: Callback<WeightUnit>,
}

fn render_page(props: &ShellProps) -> Html {
    let lang = props.lang;
    let unit = props.weight_unit;
    let nav = props.on_navigate.clone();
    match props.route {
        Route::Home => html! { <HomePage {lang} on_navigate={nav} /> },
        Route::Calculator => html! { <CalculatorPage {lang} weight_unit={unit} /> },
        Route::Method => html! { <MethodPage {lang} /> },
        Route::NotFound => {
            let go_home = Callback::from(move |()| nav.emit(Route::Home));
            html! { <NotFound on_go_home={go_home} /> }
        }
    }
}

/// Navbar, routed page and footer.
#[must_use]
pub fn render_shell(props: &ShellProps) -> Html {
    html! {
        <>
            <Navbar
                lang={props.lang}
                weight_unit={props.weight_unit}
                active={props.route}
                on_navigate={props.on_navigate.clone()}
                on_lang_change={props.on_lang_change.clone()}
                on_unit_change={props.on_unit_change.clone()}
            />
            <main id="main" role="main" class="min-h-screen">
                { render_page(props) }
            </main>
            <Footer lang={props.lang} on_navigate={props.on_navigate.clone()} />
        </>
    }
}
