use crate::i18n::{fmt_usd, t};
use petpat_core::{CostSummary, Lang};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub summary: CostSummary,
}

fn card(label_key: &str, value: u64, suffix_key: Option<&str>, highlight: bool) -> Html {
    html! {
        <div class={classes!("summary-card", highlight.then_some("summary-card-primary"))}>
            <span class="summary-label">{ t(label_key) }</span>
            <span class="summary-value">
                { fmt_usd(value) }
                if let Some(key) = suffix_key {
                    <span class="summary-suffix">{ t(key) }</span>
                }
            </span>
        </div>
    }
}

/// Headline monthly, annual and first-year totals.
#[function_component(CostSummaryCards)]
pub fn cost_summary_cards(p: &Props) -> Html {
    let s = p.summary;
    html! {
        <section class="summary-cards" aria-live="polite">
            { card("calc.summary.monthly", s.monthly, Some("calc.per_mo"), true) }
            { card("calc.summary.annual", s.annual, Some("calc.per_yr"), false) }
            { card("calc.summary.first_year", s.first_year, None, false) }
        </section>
    }
}
