use crate::components::feedback_form::FeedbackFormView;
use crate::i18n::{fmt_decimal, t};
use petpat_core::{CostLevel, Lang, SizeCategory};
use yew::prelude::*;

const CATEGORY_CARDS: [&str; 4] = ["one_time", "monthly", "annual", "insurance"];
const LIMITATIONS: [&str; 4] = ["one", "two", "three", "four"];

#[derive(Properties, PartialEq, Clone)]
pub struct MethodPageProps {
    pub lang: Lang,
}

#[function_component(MethodPage)]
pub fn method_page(p: &MethodPageProps) -> Html {
    let level_rows = CostLevel::ALL.iter().map(|level| {
        html! {
            <tr>
                <td>{ t(level.i18n_key()) }</td>
                <td class="num">{ format!("×{}", fmt_decimal(level.multiplier(), 2)) }</td>
                <td>{ t(&format!("method.level_desc.{level}")) }</td>
            </tr>
        }
    });
    let size_cards = SizeCategory::ALL.iter().map(|size| {
        html! {
            <div class="card size-card">
                <h3>{ t(size.i18n_key()) }</h3>
                <p class="text-muted">{ t(&format!("size_range.{size}")) }</p>
            </div>
        }
    });

    html! {
        <div class="method" lang={p.lang.html_lang()}>
            <header class="page-header">
                <h1>{ t("method.title") }</h1>
                <p class="lead">{ t("method.desc") }</p>
            </header>

            <section>
                <h2>{ t("method.categories_title") }</h2>
                <div class="card-grid">
                    { for CATEGORY_CARDS.iter().map(|key| html! {
                        <div class="card">
                            <h3>{ t(&format!("method.{key}.title")) }</h3>
                            <p>{ t(&format!("method.{key}.body")) }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section>
                <h2>{ t("method.levels_title") }</h2>
                <p class="text-muted">{ t("method.levels_desc") }</p>
                <table class="level-table">
                    <thead>
                        <tr>
                            <th>{ t("method.table_level") }</th>
                            <th>{ t("method.table_multiplier") }</th>
                            <th>{ t("method.table_desc") }</th>
                        </tr>
                    </thead>
                    <tbody>{ for level_rows }</tbody>
                </table>
            </section>

            <section>
                <h2>{ t("method.sizes_title") }</h2>
                <p class="text-muted">{ t("method.sizes_desc") }</p>
                <div class="card-grid">{ for size_cards }</div>
            </section>

            <section>
                <h2>{ t("method.limitations_title") }</h2>
                <ul class="limitations">
                    { for LIMITATIONS.iter().map(|key| html! {
                        <li>{ t(&format!("method.limitations.{key}")) }</li>
                    }) }
                </ul>
                <p class="text-muted small">{ t("method.last_updated") }</p>
            </section>

            <FeedbackFormView lang={p.lang} />
        </div>
    }
}
