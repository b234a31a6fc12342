use crate::components::nav_link::NavLink;
use crate::i18n::t;
use crate::router::Route;
use petpat_core::Lang;
use yew::prelude::*;

const FEATURES: [&str; 3] = ["breed", "transparent", "yours"];
const STEPS: [&str; 3] = ["one", "two", "three"];

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub lang: Lang,
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(p: &HomePageProps) -> Html {
    let link = |to: Route, class: &'static str, key: &str| {
        html! {
            <NavLink {to} on_navigate={p.on_navigate.clone()} class={classes!(class)}>
                { t(key) }
                if to == Route::Calculator { <span aria-hidden="true">{" →"}</span> }
            </NavLink>
        }
    };

    html! {
        <div class="home" lang={p.lang.html_lang()}>
            <section class="hero">
                <span class="badge">{"🐾 "}{ t("home.badge") }</span>
                <h1>
                    { t("home.title_before") }
                    <span class="text-primary">{ t("home.title_highlight") }</span>
                    { t("home.title_after") }
                </h1>
                <p class="lead">{ t("home.subtitle") }</p>
                <div class="hero-actions">
                    { link(Route::Calculator, "btn-primary", "home.cta") }
                    { link(Route::Method, "btn-outline", "home.cta_secondary") }
                </div>
            </section>

            <section class="features">
                <h2>{ t("home.features_title") }</h2>
                <p class="text-muted">{ t("home.features_subtitle") }</p>
                <div class="card-grid">
                    { for FEATURES.iter().map(|key| html! {
                        <div class="card">
                            <div class="card-icon" aria-hidden="true">{ t(&format!("home.features.{key}.icon")) }</div>
                            <h3>{ t(&format!("home.features.{key}.title")) }</h3>
                            <p>{ t(&format!("home.features.{key}.desc")) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="steps">
                <h2>{ t("home.steps_title") }</h2>
                <p class="text-muted">{ t("home.steps_subtitle") }</p>
                <ol class="card-grid">
                    { for STEPS.iter().map(|key| html! {
                        <li class="step">
                            <span class="step-num">{ t(&format!("home.steps.{key}.num")) }</span>
                            <h3>{ t(&format!("home.steps.{key}.title")) }</h3>
                            <p>{ t(&format!("home.steps.{key}.desc")) }</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="cta-band">
                <h2>{ t("home.cta_title") }</h2>
                <p>{ t("home.cta_desc") }</p>
                { link(Route::Calculator, "btn-light", "home.cta_button") }
            </section>
        </div>
    }
}
