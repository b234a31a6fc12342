use crate::components::breed_select::BreedSelect;
use crate::components::cost_detail::CostDetail;
use crate::components::cost_lists::{CostList, LifetimeProjectionView, MonthlyLegend};
use crate::components::cost_summary::CostSummaryCards;
use crate::components::pie_chart::PieChart;
use crate::components::scenario_controls::ScenarioControls;
use crate::i18n::t;
use petpat_core::{Breed, CostCategory, EstimatorSession, Lang, SessionAction, WeightUnit};
use yew::prelude::*;

const MODAL_CLASS: &str = "modal-open";

/// Which half of the calculator is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    BreedSelect,
    Estimate,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CalculatorPageProps {
    pub lang: Lang,
    pub weight_unit: WeightUnit,
    #[prop_or_default]
    pub initial_stage: Stage,
    #[prop_or_default]
    pub initial_session: EstimatorSession,
}

#[function_component(CalculatorPage)]
pub fn calculator_page(p: &CalculatorPageProps) -> Html {
    let stage = use_state(|| p.initial_stage);
    let session = use_state(|| p.initial_session.clone());

    let dispatch = {
        let session = session.clone();
        Callback::from(move |action: SessionAction| {
            let mut next = (*session).clone();
            if next.apply(action) {
                session.set(next);
            }
        })
    };

    let detail_open = session.view().is_open();
    use_effect_with(detail_open, |open| {
        crate::dom::set_body_class(MODAL_CLASS, *open);
        || crate::dom::set_body_class(MODAL_CLASS, false)
    });

    if *stage == Stage::BreedSelect {
        let on_select = {
            let dispatch = dispatch.clone();
            let stage = stage.clone();
            Callback::from(move |breed: Breed| {
                dispatch.emit(SessionAction::SelectBreed { breed });
                stage.set(Stage::Estimate);
            })
        };
        let on_skip = {
            let dispatch = dispatch.clone();
            let stage = stage.clone();
            Callback::from(move |()| {
                dispatch.emit(SessionAction::ClearBreed);
                stage.set(Stage::Estimate);
            })
        };
        return html! {
            <BreedSelect lang={p.lang} weight_unit={p.weight_unit} {on_select} {on_skip} />
        };
    }

    let on_change_breed = {
        let stage = stage.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.emit(SessionAction::CloseDetail);
            stage.set(Stage::BreedSelect);
        })
    };
    let on_open = {
        let dispatch = dispatch.clone();
        Callback::from(move |category: CostCategory| dispatch.emit(SessionAction::OpenDetail { category }))
    };

    let breakdown = session.breakdown();
    let panel = session.detail_panel();

    html! {
        <div class="calculator" lang={p.lang.html_lang()}>
            <h1 class="page-title">{ t("calc.title") }</h1>
            <ScenarioControls
                lang={p.lang}
                params={session.params().clone()}
                on_action={dispatch.clone()}
                {on_change_breed}
            />
            <CostSummaryCards lang={p.lang} summary={breakdown.summary} />
            <div class="monthly-grid">
                <PieChart
                    items={breakdown.monthly.items().to_vec()}
                    total={breakdown.monthly.total()}
                    on_select={on_open.clone()}
                    show_total=true
                />
                <MonthlyLegend lang={p.lang} breakdown={breakdown.clone()} {on_open} />
            </div>
            <div class="fixed-grid">
                <CostList lang={p.lang} title_key="calc.one_time_title" section={breakdown.one_time.clone()} />
                <CostList
                    lang={p.lang}
                    title_key="calc.annual_title"
                    section={breakdown.annual_fixed.clone()}
                    suffix_key={Some(AttrValue::from("calc.per_yr"))}
                />
            </div>
            <LifetimeProjectionView lang={p.lang} breakdown={breakdown.clone()} />
            if let Some(panel) = panel {
                <CostDetail
                    lang={p.lang}
                    weight_unit={p.weight_unit}
                    {panel}
                    breakdown={breakdown.clone()}
                    custom_price={AttrValue::from(session.custom_price_input().to_string())}
                    on_action={dispatch.clone()}
                />
            }
        </div>
    }
}
