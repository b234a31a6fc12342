use crate::components::food_editor::FoodEditor;
use crate::components::insurance_editor::InsuranceEditor;
use crate::components::override_editor::OverrideEditor;
use crate::components::pie_chart::PieChart;
use crate::i18n::{fmt_usd, t};
use petpat_core::{
    CostBreakdown, CostCategory, DetailBody, DetailPanel, Lang, SessionAction, WeightUnit,
};
use yew::prelude::*;

const DETAIL_PIE_SIZE: f64 = 360.0;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub weight_unit: WeightUnit,
    pub panel: DetailPanel,
    pub breakdown: CostBreakdown,
    pub custom_price: AttrValue,
    pub on_action: Callback<SessionAction>,
}

/// Drill-down overlay for one monthly category.
///
/// The chart covers every monthly category, switched off or not, so any of
/// them can be selected from here.
#[function_component(CostDetail)]
pub fn cost_detail(p: &Props) -> Html {
    let panel = &p.panel;
    let category = panel.category;

    let switch = {
        let cb = p.on_action.clone();
        Callback::from(move |category: CostCategory| cb.emit(SessionAction::SwitchDetail { category }))
    };
    let on_back = {
        let cb = p.on_action.clone();
        Callback::from(move |_| cb.emit(SessionAction::CloseDetail))
    };
    let on_keydown = {
        let cb = p.on_action.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                cb.emit(SessionAction::CloseDetail);
            }
        })
    };

    let tabs = CostCategory::MONTHLY.iter().map(|tab| {
        let tab = *tab;
        let active = tab == category;
        let onclick = {
            let switch = switch.clone();
            Callback::from(move |_| switch.emit(tab))
        };
        html! {
            <button
                type="button"
                role="tab"
                class={classes!("detail-tab", active.then_some("detail-tab-active"))}
                aria-selected={active.to_string()}
                data-category={tab.as_str()}
                {onclick}
            >
                { t(&tab.i18n_key()) }
            </button>
        }
    });

    let body = match &panel.body {
        DetailBody::Food(detail) => html! {
            <FoodEditor
                lang={p.lang}
                weight_unit={p.weight_unit}
                detail={detail.clone()}
                custom_price={p.custom_price.clone()}
                on_action={p.on_action.clone()}
            />
        },
        DetailBody::Insurance(detail) => html! {
            <InsuranceEditor
                lang={p.lang}
                detail={detail.clone()}
                enabled={panel.counts_toward_total}
                on_action={p.on_action.clone()}
            />
        },
        DetailBody::Fixed => Html::default(),
    };

    html! {
        <div class="detail-overlay" role="dialog" aria-modal="true" tabindex="-1" onkeydown={on_keydown}>
            <div class="detail-inner">
                <button type="button" class="back-btn" onclick={on_back}>{"← "}{ t("calc.cost_detail_back") }</button>
                <div class="detail-grid">
                    <div class="detail-chart">
                        <PieChart
                            items={p.breakdown.monthly_all.items().to_vec()}
                            total={p.breakdown.monthly_all.total()}
                            selected={Some(category)}
                            on_select={switch.clone()}
                            size={DETAIL_PIE_SIZE}
                            show_total=true
                            show_slice_labels=true
                        />
                        <p class="hint">{ t("calc.cost_detail_hint") }</p>
                    </div>
                    <div class="detail-panel">
                        <div class="detail-tabs" role="tablist">{ for tabs }</div>
                        <header class="detail-header">
                            <h2>{ t(&category.i18n_key()) }</h2>
                            <p class="detail-value">
                                { fmt_usd(panel.value) }
                                <span class="detail-suffix">{" "}{ t("calc.per_mo_short") }</span>
                            </p>
                            if !panel.counts_toward_total {
                                <span class="badge badge-off">{ t("calc.excluded") }</span>
                            }
                        </header>
                        { body }
                        <OverrideEditor
                            {category}
                            computed={panel.computed}
                            text={panel.override_text.clone().map(AttrValue::from)}
                            overridden={panel.overridden}
                            on_action={p.on_action.clone()}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
