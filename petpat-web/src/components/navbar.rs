use crate::components::nav_link::NavLink;
use crate::i18n::{locales, t};
use crate::router::Route;
use petpat_core::{Lang, WeightUnit};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub weight_unit: WeightUnit,
    pub active: Route,
    pub on_navigate: Callback<Route>,
    pub on_lang_change: Callback<Lang>,
    pub on_unit_change: Callback<WeightUnit>,
}

fn toggle_class(on: bool) -> Classes {
    classes!("toggle-btn", on.then_some("toggle-btn-active"))
}

#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let lang_buttons = locales().iter().map(|meta| {
        let cb = p.on_lang_change.clone();
        let lang = meta.lang;
        let onclick = Callback::from(move |_| cb.emit(lang));
        html! {
            <button type="button" class={toggle_class(p.lang == lang)} aria-pressed={(p.lang == lang).to_string()} {onclick}>
                { meta.name }
            </button>
        }
    });
    let unit_buttons = WeightUnit::ALL.iter().map(|unit| {
        let cb = p.on_unit_change.clone();
        let unit = *unit;
        let onclick = Callback::from(move |_| cb.emit(unit));
        html! {
            <button type="button" class={toggle_class(p.weight_unit == unit)} aria-pressed={(p.weight_unit == unit).to_string()} {onclick}>
                { unit.suffix() }
            </button>
        }
    });

    html! {
        <nav class="navbar" aria-label={t("app.name")}>
            <a href="#main" class="sr-only">{ t("nav.skip_to_content") }</a>
            <div class="navbar-inner">
                <NavLink to={Route::Home} on_navigate={p.on_navigate.clone()} class={classes!("brand")}>
                    <span aria-hidden="true">{"🐾"}</span>
                    { t("app.name") }
                </NavLink>
                <div class="navbar-links">
                    { for Route::NAV.iter().map(|route| html! {
                        <NavLink
                            to={*route}
                            on_navigate={p.on_navigate.clone()}
                            class={classes!("nav-link", (p.active == *route).then_some("nav-link-active"))}
                        >
                            { t(route.i18n_key()) }
                        </NavLink>
                    }) }
                    <div class="toggle-group" role="group" aria-label={t("nav.language")} id="lang-switch">
                        { for lang_buttons }
                    </div>
                    <div class="toggle-group" role="group" aria-label={t("nav.unit")} id="unit-switch">
                        { for unit_buttons }
                    </div>
                </div>
            </div>
        </nav>
    }
}
