use crate::dom::event_value;
use crate::i18n::{fmt_decimal, fmt_grouped, t, tr, tr1};
use petpat_core::{
    AnnualLimit, Deductible, InsuranceDetail, Lang, Reimbursement, SessionAction, parse_or_default,
};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub detail: InsuranceDetail,
    /// Whether insurance currently counts toward the totals.
    pub enabled: bool,
    pub on_action: Callback<SessionAction>,
}

fn limit_label(limit: AnnualLimit) -> String {
    limit.dollars().map_or_else(
        || t("detail.insurance.unlimited"),
        |d| format!("${}", fmt_grouped(u64::from(d))),
    )
}

fn factor_row(key: &str, value: f64) -> Html {
    html! {
        <li class="factor-row">
            <span>{ t(key) }</span>
            <span class="factor-value">{ format!("×{}", fmt_decimal(value, 2)) }</span>
        </li>
    }
}

#[function_component(InsuranceEditor)]
pub fn insurance_editor(p: &Props) -> Html {
    let detail = &p.detail;
    let quote = &detail.quote;
    let factors = &quote.factors;

    let on_age = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(years) = event_value(&e).and_then(|v| v.trim().parse::<i64>().ok()) {
                cb.emit(SessionAction::SetAge { years });
            }
        })
    };
    let on_reimbursement = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(raw) = event_value(&e) {
                let reimbursement = parse_or_default::<Reimbursement>(&raw);
                cb.emit(SessionAction::SetReimbursement { reimbursement });
            }
        })
    };
    let on_deductible = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(raw) = event_value(&e) {
                let deductible = parse_or_default::<Deductible>(&raw);
                cb.emit(SessionAction::SetDeductible { deductible });
            }
        })
    };
    let on_limit = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(raw) = event_value(&e) {
                let limit = parse_or_default::<AnnualLimit>(&raw);
                cb.emit(SessionAction::SetAnnualLimit { limit });
            }
        })
    };

    let range = {
        let low = fmt_grouped(quote.low);
        let high = fmt_grouped(quote.high);
        let args = BTreeMap::from([("low", low.as_str()), ("high", high.as_str())]);
        tr("detail.insurance.range", Some(&args))
    };

    html! {
        <div class="detail-editor insurance-editor">
            if !p.enabled {
                <p class="notice">{ t("detail.insurance.disabled") }</p>
            }
            <label class="control">
                <span class="control-label">{ t("detail.insurance.age_label") }</span>
                <input id="ins-age" type="number" min="0" max="20" step="1" value={detail.age_years.to_string()} onchange={on_age} />
            </label>
            <label class="control">
                <span class="control-label">{ t("detail.insurance.reimbursement_label") }</span>
                <select id="ins-reimbursement" onchange={on_reimbursement}>
                    { for Reimbursement::ALL.iter().map(|r| html! {
                        <option value={r.as_str()} selected={*r == detail.plan.reimbursement}>{ format!("{}%", r.percent()) }</option>
                    }) }
                </select>
            </label>
            <label class="control">
                <span class="control-label">{ t("detail.insurance.deductible_label") }</span>
                <select id="ins-deductible" onchange={on_deductible}>
                    { for Deductible::ALL.iter().map(|d| html! {
                        <option value={d.as_str()} selected={*d == detail.plan.deductible}>{ format!("${}", fmt_grouped(u64::from(d.dollars()))) }</option>
                    }) }
                </select>
            </label>
            <label class="control">
                <span class="control-label">{ t("detail.insurance.limit_label") }</span>
                <select id="ins-limit" onchange={on_limit}>
                    { for AnnualLimit::ALL.iter().map(|l| html! {
                        <option value={l.as_str()} selected={*l == detail.plan.annual_limit}>{ limit_label(*l) }</option>
                    }) }
                </select>
            </label>
            <p class="quote-range">{ range }</p>
            <h4>{ t("detail.insurance.factors_title") }</h4>
            <ul class="factor-list">
                <li class="factor-row">
                    <span>{ t("detail.insurance.factor_base") }</span>
                    <span class="factor-value">{ format!("${}", fmt_decimal(factors.base, 0)) }</span>
                </li>
                { factor_row("detail.insurance.factor_age", factors.age) }
                { factor_row("detail.insurance.factor_breed", factors.breed) }
                { factor_row("detail.insurance.factor_region", factors.region) }
                { factor_row("detail.insurance.factor_plan", factors.plan()) }
            </ul>
            if detail.high_risk {
                if let Some(name) = detail.breed_name.clone() {
                    <p class="notice notice-warn">{ tr1("detail.insurance.high_risk", "breed", &name) }</p>
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use petpat_core::{BreedCatalog, CostCategory, DetailBody, EstimatorSession};
    use yew::LocalServerRenderer;

    fn render(session: &EstimatorSession) -> String {
        let panel = session.detail_panel().expect("panel open");
        let DetailBody::Insurance(detail) = panel.body else {
            panic!("insurance panel expected");
        };
        let props = Props {
            lang: Lang::En,
            detail,
            enabled: panel.counts_toward_total,
            on_action: Callback::noop(),
        };
        block_on(LocalServerRenderer::<InsuranceEditor>::with_props(props).render())
    }

    #[test]
    fn disabled_insurance_is_flagged() {
        crate::i18n::set_lang("en");
        let mut session = EstimatorSession::new();
        session.open_detail(CostCategory::Insurance);
        let html = render(&session);
        assert!(html.contains("switched off"));
        assert!(html.contains("Unlimited"));
        assert!(html.contains("80%"));
    }

    #[test]
    fn high_risk_breed_gets_a_warning() {
        crate::i18n::set_lang("en");
        let catalog = BreedCatalog::load_from_static();
        let bulldog = catalog
            .breeds()
            .iter()
            .find(|b| b.is_high_risk())
            .cloned()
            .expect("catalog has a high-risk breed");
        let name = bulldog.name_en.clone();
        let mut session = EstimatorSession::new();
        session.select_breed(bulldog);
        session.open_detail(CostCategory::Insurance);
        let html = render(&session);
        assert!(html.contains(&format!("{name} is a higher-risk breed")));
    }
}
