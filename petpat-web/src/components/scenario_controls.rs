use crate::dom::{event_checked, event_value};
use crate::i18n::t;
use petpat_core::{
    AcquisitionMethod, CostCategory, CostLevel, Lang, ScenarioParameters, SessionAction,
    SizeCategory,
};
use yew::prelude::*;

/// Categories the user can switch on and off, in display order.
pub const TOGGLES: [CostCategory; 5] = [
    CostCategory::Treats,
    CostCategory::Grooming,
    CostCategory::ToysSupplies,
    CostCategory::Insurance,
    CostCategory::TrainingClasses,
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub params: ScenarioParameters,
    pub on_action: Callback<SessionAction>,
    pub on_change_breed: Callback<()>,
}

fn options<T: Copy + PartialEq + 'static>(
    all: &'static [T],
    current: T,
    key: fn(T) -> &'static str,
    label: fn(T) -> String,
) -> Html {
    html! {
        <>
            { for all.iter().map(|item| html! {
                <option value={key(*item)} selected={*item == current}>{ label(*item) }</option>
            }) }
        </>
    }
}

#[function_component(ScenarioControls)]
pub fn scenario_controls(p: &Props) -> Html {
    let params = &p.params;

    let on_size = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(size) = event_value(&e).and_then(|v| v.parse::<SizeCategory>().ok()) {
                cb.emit(SessionAction::SetSize { size });
            }
        })
    };
    let on_level = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(level) = event_value(&e).and_then(|v| v.parse::<CostLevel>().ok()) {
                cb.emit(SessionAction::SetCostLevel { level });
            }
        })
    };
    let acquisition_buttons = AcquisitionMethod::ALL.iter().map(|method| {
        let method = *method;
        let cb = p.on_action.clone();
        let onclick = Callback::from(move |_| cb.emit(SessionAction::SetAcquisition { method }));
        let active = params.acquisition == method;
        html! {
            <button type="button" class={classes!("toggle-btn", active.then_some("toggle-btn-active"))} aria-pressed={active.to_string()} {onclick}>
                { t(&format!("acquisition.{method}")) }
            </button>
        }
    });
    let toggles = TOGGLES.iter().map(|category| {
        let category = *category;
        let cb = p.on_action.clone();
        let onchange = Callback::from(move |e: Event| {
            if let Some(enabled) = event_checked(&e) {
                cb.emit(SessionAction::SetEnabled { category, enabled });
            }
        });
        let id = format!("include-{category}");
        html! {
            <label class="include-toggle" for={id.clone()}>
                <input type="checkbox" id={id} checked={params.is_enabled(category)} {onchange} />
                { t(&category.i18n_key()) }
            </label>
        }
    });
    let on_change_breed = {
        let cb = p.on_change_breed.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let breed_label = params.breed.as_ref().map_or_else(
        || t("calc.no_breed"),
        |b| b.display_name(p.lang.as_str()).to_string(),
    );

    html! {
        <section class="scenario-controls">
            <div class="control">
                <span class="control-label">{ t("calc.breed_label") }</span>
                <span class="breed-current">{ breed_label }</span>
                <button type="button" class="link-btn" onclick={on_change_breed}>{ t("calc.change_breed") }</button>
            </div>
            <label class="control">
                <span class="control-label">{ t("calc.size_label") }</span>
                <select id="size-select" onchange={on_size}>
                    { options(SizeCategory::ALL, params.size, SizeCategory::as_str, |s| t(s.i18n_key())) }
                </select>
            </label>
            <label class="control">
                <span class="control-label">{ t("calc.level_label") }</span>
                <select id="level-select" onchange={on_level}>
                    { options(CostLevel::ALL, params.cost_level, CostLevel::as_str, |l| t(l.i18n_key())) }
                </select>
            </label>
            <div class="control">
                <span class="control-label">{ t("calc.acquisition_label") }</span>
                <div class="toggle-group" role="group">{ for acquisition_buttons }</div>
            </div>
            <fieldset class="control includes">
                <legend class="control-label">{ t("calc.include_label") }</legend>
                { for toggles }
            </fieldset>
        </section>
    }
}
