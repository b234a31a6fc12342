use crate::i18n::{fmt_usd, t, tr1};
use petpat_core::{CostBreakdown, CostCategory, CostSection, Lang, category_color};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionProps {
    pub lang: Lang,
    pub title_key: AttrValue,
    pub section: CostSection,
    #[prop_or_default]
    pub suffix_key: Option<AttrValue>,
}

/// A titled list of fixed costs with its total.
#[function_component(CostList)]
pub fn cost_list(p: &SectionProps) -> Html {
    let suffix = p.suffix_key.as_deref().map(t).unwrap_or_default();
    html! {
        <section class="cost-list">
            <h3>{ t(&p.title_key) }</h3>
            <ul>
                { for p.section.items().iter().map(|item| html! {
                    <li class="cost-row" data-category={item.category.as_str()}>
                        <span>{ t(&item.category.i18n_key()) }</span>
                        <span class="cost-value">{ fmt_usd(item.value) }</span>
                    </li>
                }) }
            </ul>
            <div class="cost-total">
                <span>{ t("calc.total") }</span>
                <span class="cost-value">{ fmt_usd(p.section.total()) }{ suffix }</span>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MonthlyProps {
    pub lang: Lang,
    pub breakdown: CostBreakdown,
    pub on_open: Callback<CostCategory>,
}

/// Monthly legend: every line with its color, value and a details button.
#[function_component(MonthlyLegend)]
pub fn monthly_legend(p: &MonthlyProps) -> Html {
    let rows = p.breakdown.lines.iter().map(|line| {
        let category = line.category;
        let onclick = {
            let cb = p.on_open.clone();
            Callback::from(move |_| cb.emit(category))
        };
        html! {
            <li class={classes!("legend-row", (!line.enabled).then_some("legend-row-off"))} data-category={category.as_str()}>
                <span class="legend-swatch" style={format!("background:{}", category_color(category))} />
                <span class="legend-name">
                    { t(&category.i18n_key()) }
                    if line.overridden {
                        <span class="badge badge-manual">{ t("calc.overridden") }</span>
                    }
                    if !line.enabled {
                        <span class="badge badge-off">{ t("calc.excluded") }</span>
                    }
                </span>
                <span class="cost-value">{ fmt_usd(line.value) }{ t("calc.per_mo") }</span>
                <button type="button" class="link-btn" {onclick}>{ t("calc.details") }</button>
            </li>
        }
    });
    html! {
        <section class="cost-list monthly-legend">
            <h3>{ t("calc.monthly_title") }</h3>
            <ul>{ for rows }</ul>
            <div class="cost-total">
                <span>{ t("calc.total") }</span>
                <span class="cost-value">{ fmt_usd(p.breakdown.summary.monthly) }{ t("calc.per_mo") }</span>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LifetimeProps {
    pub lang: Lang,
    pub breakdown: CostBreakdown,
}

#[function_component(LifetimeProjectionView)]
pub fn lifetime_projection_view(p: &LifetimeProps) -> Html {
    let lifetime = p.breakdown.lifetime;
    let years = [(5, lifetime.year5), (10, lifetime.year10), (15, lifetime.year15)];
    html! {
        <section class="lifetime">
            <h3>{ t("calc.lifetime_title") }</h3>
            <div class="lifetime-grid">
                { for years.iter().map(|(n, total)| html! {
                    <div class="lifetime-card">
                        <span class="lifetime-label">{ tr1("calc.lifetime_years", "years", &n.to_string()) }</span>
                        <span class="lifetime-value">{ fmt_usd(*total) }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
