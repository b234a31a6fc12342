use crate::dom::event_value;
use crate::i18n::{fmt_decimal, t, tr, tr1};
use petpat_core::{
    ActivityLevel, FoodDetail, FoodPrice, FoodTier, Lang, SessionAction, WeightUnit,
    parse_or_default,
};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub weight_unit: WeightUnit,
    pub detail: FoodDetail,
    /// Raw custom price text as typed.
    pub custom_price: AttrValue,
    pub on_action: Callback<SessionAction>,
}

/// A food quantity held in kg, shown in the display unit.
fn food_amount(kg: f64, unit: WeightUnit) -> String {
    let shown = unit.from_lbs(WeightUnit::Kg.to_lbs(kg));
    format!("{} {}", fmt_decimal(shown, 2), unit.suffix())
}

#[function_component(FoodEditor)]
pub fn food_editor(p: &Props) -> Html {
    let detail = &p.detail;
    let calc = &detail.calc;
    let unit = p.weight_unit;

    let on_weight = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(text) = event_value(&e) {
                cb.emit(SessionAction::SetWeightInput { text, unit });
            }
        })
    };
    let on_reset = {
        let cb = p.on_action.clone();
        Callback::from(move |_| cb.emit(SessionAction::ResetWeight))
    };
    let on_activity = {
        let cb = p.on_action.clone();
        Callback::from(move |e: Event| {
            if let Some(raw) = event_value(&e) {
                let activity = parse_or_default::<ActivityLevel>(&raw);
                cb.emit(SessionAction::SetActivity { activity });
            }
        })
    };
    let on_custom = {
        let cb = p.on_action.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(text) = event_value(&e) {
                cb.emit(SessionAction::SetCustomPrice { text });
            }
        })
    };

    let weight_value = if detail.weight_is_default {
        String::new()
    } else {
        fmt_decimal(unit.from_lbs(calc.weight_lbs), 1)
    };
    let tiers = FoodTier::ALL.iter().map(|tier| {
        let tier = *tier;
        let active = detail.price == FoodPrice::Tier(tier);
        let onclick = {
            let cb = p.on_action.clone();
            Callback::from(move |_| cb.emit(SessionAction::SelectFoodTier { tier }))
        };
        html! {
            <button type="button" class={classes!("tier-btn", active.then_some("tier-btn-active"))} aria-pressed={active.to_string()} {onclick}>
                <span>{ t(tier.i18n_key()) }</span>
                <span class="tier-price">{ tr1("detail.food.per_lb", "price", &fmt_decimal(tier.price_per_lb(), 2)) }</span>
            </button>
        }
    });
    let mer = {
        let kcal = fmt_decimal(calc.mer_kcal, 0);
        let factor = fmt_decimal(calc.activity_factor, 1);
        let args = BTreeMap::from([("kcal", kcal.as_str()), ("factor", factor.as_str())]);
        tr("detail.food.mer", Some(&args))
    };

    html! {
        <div class="detail-editor food-editor">
            <label class="control">
                <span class="control-label">{ tr1("detail.food.weight_label", "unit", unit.suffix()) }</span>
                <input
                    id="food-weight"
                    type="number"
                    min="0"
                    step="0.1"
                    inputmode="decimal"
                    value={weight_value}
                    placeholder={fmt_decimal(unit.from_lbs(detail.default_weight_lbs), 1)}
                    onchange={on_weight}
                />
            </label>
            <p class="hint">
                { tr1("detail.food.weight_default", "weight", &unit.format(detail.default_weight_lbs)) }
                if !detail.weight_is_default {
                    {" "}
                    <button type="button" class="link-btn" onclick={on_reset}>{ t("detail.food.weight_reset") }</button>
                }
            </p>
            <label class="control">
                <span class="control-label">{ t("detail.food.activity_label") }</span>
                <select id="food-activity" onchange={on_activity}>
                    { for ActivityLevel::ALL.iter().map(|a| html! {
                        <option value={a.as_str()} selected={*a == detail.activity}>{ t(a.i18n_key()) }</option>
                    }) }
                </select>
            </label>
            <div class="control">
                <span class="control-label">{ t("detail.food.tier_label") }</span>
                <div class="tier-grid">{ for tiers }</div>
            </div>
            <label class="control">
                <span class="control-label">{ t("detail.food.custom_label") }</span>
                <input
                    id="food-custom-price"
                    type="text"
                    inputmode="decimal"
                    placeholder={t("detail.food.custom_placeholder")}
                    value={p.custom_price.clone()}
                    oninput={on_custom}
                />
            </label>
            <ul class="calc-steps">
                <li>{ tr1("detail.food.rer", "kcal", &fmt_decimal(calc.rer_kcal, 0)) }</li>
                <li>{ mer }</li>
                <li>{ tr1("detail.food.daily", "amount", &food_amount(calc.daily_food_kg, unit)) }</li>
                <li>{ tr1("detail.food.monthly_amount", "amount", &food_amount(calc.monthly_food_kg, unit)) }</li>
                <li>{ tr1("detail.food.per_lb", "price", &fmt_decimal(calc.price_per_lb, 2)) }</li>
            </ul>
            <p class="formula">{ t("detail.food.formula") }</p>
        </div>
    }
}
