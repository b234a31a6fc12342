use crate::components::nav_link::NavLink;
use crate::i18n::{current_year, t, tr1};
use crate::router::Route;
use petpat_core::Lang;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub on_navigate: Callback<Route>,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let year = current_year().to_string();
    html! {
        <footer class="site-footer" lang={p.lang.html_lang()}>
            <div class="footer-inner">
                <NavLink to={Route::Home} on_navigate={p.on_navigate.clone()} class={classes!("brand")}>
                    <span aria-hidden="true">{"🐾"}</span>
                    { t("app.name") }
                </NavLink>
                <p class="footer-desc">{ t("footer.desc") }</p>
                <div class="footer-links">
                    { for Route::NAV.iter().map(|route| html! {
                        <NavLink to={*route} on_navigate={p.on_navigate.clone()} class={classes!("footer-link")}>
                            { t(route.i18n_key()) }
                        </NavLink>
                    }) }
                </div>
                <div class="footer-legal">
                    <p>{ t("footer.disclaimer") }</p>
                    <p>{ tr1("footer.copyright", "year", &year) }</p>
                </div>
            </div>
        </footer>
    }
}
