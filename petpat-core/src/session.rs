//! Estimator session: the scenario, its overrides and the drill-down state,
//! mutated one user action at a time.
use serde::{Deserialize, Serialize};

use crate::breakdown::{CostBreakdown, CostCategory, Estimate, estimate};
use crate::breeds::Breed;
use crate::constants::{LOG_DETAIL_TRANSITION, LOG_INPUT_IGNORED, LOG_SCENARIO_RESET};
use crate::debug_log_enabled;
use crate::detail::{DetailPanel, DetailView};
use crate::food::{FoodPrice, clamp_weight_lbs};
use crate::insurance::clamp_age;
use crate::numbers::parse_finite;
use crate::overrides::OverrideMap;
use crate::scenario::ScenarioParameters;
use crate::tables::{
    AcquisitionMethod, ActivityLevel, AnnualLimit, CostLevel, Deductible, FoodTier, Reimbursement,
    SizeCategory,
};
use crate::units::WeightUnit;

/// A single user interaction. Serializable so scripted scenarios can replay them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    OpenDetail { category: CostCategory },
    SwitchDetail { category: CostCategory },
    CloseDetail,
    SetWeightInput {
        text: String,
        #[serde(default)]
        unit: WeightUnit,
    },
    ResetWeight,
    SetActivity { activity: ActivityLevel },
    SelectFoodTier { tier: FoodTier },
    SetCustomPrice { text: String },
    SetAge { years: i64 },
    SetReimbursement { reimbursement: Reimbursement },
    SetDeductible { deductible: Deductible },
    SetAnnualLimit { limit: AnnualLimit },
    SetOverride { category: CostCategory, text: String },
    ClearOverride { category: CostCategory },
    SetSize { size: SizeCategory },
    SelectBreed { breed: Breed },
    ClearBreed,
    SetCostLevel { level: CostLevel },
    SetAcquisition { method: AcquisitionMethod },
    SetEnabled { category: CostCategory, enabled: bool },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EstimatorSession {
    params: ScenarioParameters,
    overrides: OverrideMap,
    view: DetailView,
    custom_price_input: String,
    /// Last tier picked; clearing the custom price falls back to it.
    food_tier: FoodTier,
}

impl EstimatorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn params(&self) -> &ScenarioParameters {
        &self.params
    }

    #[must_use]
    pub const fn overrides(&self) -> &OverrideMap {
        &self.overrides
    }

    #[must_use]
    pub const fn view(&self) -> DetailView {
        self.view
    }

    /// Text currently in the custom food price field.
    #[must_use]
    pub fn custom_price_input(&self) -> &str {
        &self.custom_price_input
    }

    /// Recompute the full estimate from current state.
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        estimate(&self.params, &self.overrides)
    }

    #[must_use]
    pub fn breakdown(&self) -> CostBreakdown {
        self.estimate().breakdown
    }

    /// View model for the expanded category, if any.
    #[must_use]
    pub fn detail_panel(&self) -> Option<DetailPanel> {
        let category = self.view.selected()?;
        DetailPanel::build(category, &self.params, &self.overrides, &self.estimate())
    }

    /// Apply one action, returning whether anything changed.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        let before_params = self.params.clone();
        let before_overrides = self.overrides.clone();
        let before_view = self.view;
        let before_price = self.custom_price_input.clone();
        match action {
            SessionAction::OpenDetail { category } => {
                self.open_detail(category);
            }
            SessionAction::SwitchDetail { category } => {
                self.switch_detail(category);
            }
            SessionAction::CloseDetail => self.close_detail(),
            SessionAction::SetWeightInput { text, unit } => self.set_weight_input(&text, unit),
            SessionAction::ResetWeight => self.reset_weight(),
            SessionAction::SetActivity { activity } => self.set_activity(activity),
            SessionAction::SelectFoodTier { tier } => self.select_food_tier(tier),
            SessionAction::SetCustomPrice { text } => self.set_custom_price(&text),
            SessionAction::SetAge { years } => self.set_age(years),
            SessionAction::SetReimbursement { reimbursement } => {
                self.params.insurance.plan.reimbursement = reimbursement;
            }
            SessionAction::SetDeductible { deductible } => {
                self.params.insurance.plan.deductible = deductible;
            }
            SessionAction::SetAnnualLimit { limit } => {
                self.params.insurance.plan.annual_limit = limit;
            }
            SessionAction::SetOverride { category, text } => self.set_override(category, text),
            SessionAction::ClearOverride { category } => {
                self.clear_override(category);
            }
            SessionAction::SetSize { size } => self.set_size(size),
            SessionAction::SelectBreed { breed } => self.select_breed(breed),
            SessionAction::ClearBreed => self.clear_breed(),
            SessionAction::SetCostLevel { level } => self.params.cost_level = level,
            SessionAction::SetAcquisition { method } => self.params.acquisition = method,
            SessionAction::SetEnabled { category, enabled } => {
                self.params.set_enabled(category, enabled);
            }
        }
        self.params != before_params
            || self.overrides != before_overrides
            || self.view != before_view
            || self.custom_price_input != before_price
    }

    // Navigation ---------------------------------------------------------

    /// Expand a monthly category. Non-monthly categories have no detail panel.
    pub fn open_detail(&mut self, category: CostCategory) -> bool {
        if !category.is_monthly() {
            log_ignored("open_detail", category.as_str());
            return false;
        }
        self.transition(DetailView::Detail(category));
        true
    }

    /// Move laterally between detail tabs; only valid while a panel is open.
    pub fn switch_detail(&mut self, category: CostCategory) -> bool {
        if !self.view.is_open() || !category.is_monthly() {
            log_ignored("switch_detail", category.as_str());
            return false;
        }
        self.transition(DetailView::Detail(category));
        true
    }

    pub fn close_detail(&mut self) {
        self.transition(DetailView::Collapsed);
    }

    fn transition(&mut self, next: DetailView) {
        if debug_log_enabled() {
            log::debug!("{LOG_DETAIL_TRANSITION} {:?} -> {:?}", self.view, next);
        }
        self.view = next;
    }

    // Food ---------------------------------------------------------------

    /// Set the weight from display-unit text. Empty text returns to the
    /// default weight; unparseable text is ignored.
    pub fn set_weight_input(&mut self, text: &str, unit: WeightUnit) {
        if text.trim().is_empty() {
            self.params.food.weight_lbs = None;
            return;
        }
        match unit.parse_to_lbs(text) {
            Some(lbs) => self.params.food.weight_lbs = Some(clamp_weight_lbs(lbs)),
            None => log_ignored("weight", text),
        }
    }

    /// Back to the size or breed default weight. Overrides priced on the old
    /// weight are dropped with it.
    pub fn reset_weight(&mut self) {
        self.reset_for_new_dog("weight");
    }

    pub fn set_activity(&mut self, activity: ActivityLevel) {
        self.params.food.activity = activity;
    }

    /// Choose a tier; this always discards any custom price.
    pub fn select_food_tier(&mut self, tier: FoodTier) {
        self.food_tier = tier;
        self.params.food.price = FoodPrice::Tier(tier);
        self.custom_price_input.clear();
    }

    /// Enter a custom price per lb. Empty text reverts to the last selected tier.
    pub fn set_custom_price(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.params.food.price = FoodPrice::Tier(self.food_tier);
            self.custom_price_input.clear();
            return;
        }
        self.custom_price_input = text.to_string();
        match parse_finite(text) {
            Some(price) => self.params.food.price = FoodPrice::custom(price),
            None => log_ignored("custom_price", text),
        }
    }

    // Insurance ----------------------------------------------------------

    pub fn set_age(&mut self, years: i64) {
        self.params.insurance.age_years = clamp_age(years);
    }

    // Overrides ----------------------------------------------------------

    pub fn set_override(&mut self, category: CostCategory, text: impl Into<String>) {
        self.overrides.set(category, text);
    }

    pub fn clear_override(&mut self, category: CostCategory) -> bool {
        self.overrides.clear(category)
    }

    // Scenario -----------------------------------------------------------

    /// Choose a size directly. Drops any breed, explicit weight and overrides.
    pub fn set_size(&mut self, size: SizeCategory) {
        self.params.size = size;
        self.params.breed = None;
        self.reset_for_new_dog("size");
    }

    /// Choose a breed; its weight range decides the size class.
    pub fn select_breed(&mut self, breed: Breed) {
        self.params.size = breed.size();
        self.params.breed = Some(breed);
        self.reset_for_new_dog("breed");
    }

    pub fn clear_breed(&mut self) {
        if self.params.breed.take().is_some() {
            self.reset_for_new_dog("breed-cleared");
        }
    }

    fn reset_for_new_dog(&mut self, reason: &str) {
        if debug_log_enabled() {
            log::debug!("{LOG_SCENARIO_RESET} {reason}");
        }
        self.params.food.weight_lbs = None;
        self.overrides.clear_all();
    }
}

fn log_ignored(field: &str, text: &str) {
    if debug_log_enabled() {
        log::debug!("{LOG_INPUT_IGNORED} {field}={text:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::BreedCatalog;

    #[test]
    fn detail_navigation_follows_state_machine() {
        let mut session = EstimatorSession::new();
        assert!(!session.switch_detail(CostCategory::Food));
        assert_eq!(session.view(), DetailView::Collapsed);
        assert!(!session.open_detail(CostCategory::Vaccines));
        assert!(session.open_detail(CostCategory::Food));
        assert!(session.switch_detail(CostCategory::Insurance));
        assert_eq!(session.view(), DetailView::Detail(CostCategory::Insurance));
        session.close_detail();
        assert_eq!(session.view(), DetailView::Collapsed);
        assert!(session.detail_panel().is_none());
    }

    #[test]
    fn weight_input_rules() {
        let mut session = EstimatorSession::new();
        session.set_weight_input("50", WeightUnit::Lbs);
        assert_eq!(session.params().food.weight_lbs, Some(50.0));
        session.set_weight_input("fifty", WeightUnit::Lbs);
        assert_eq!(session.params().food.weight_lbs, Some(50.0));
        session.set_weight_input("0", WeightUnit::Lbs);
        assert_eq!(session.params().food.weight_lbs, Some(1.0));
        session.set_weight_input("", WeightUnit::Lbs);
        assert_eq!(session.params().food.weight_lbs, None);
        session.set_weight_input("10", WeightUnit::Kg);
        let lbs = session.params().food.weight_lbs.unwrap();
        assert!((lbs - 10.0 / 0.453_592).abs() < 1e-9);
        session.reset_weight();
        assert_eq!(session.params().food.weight_lbs, None);
    }

    #[test]
    fn tier_and_custom_price_are_exclusive() {
        let mut session = EstimatorSession::new();
        session.set_custom_price("3.75");
        assert_eq!(session.params().food.price, FoodPrice::Custom(3.75));
        assert_eq!(session.custom_price_input(), "3.75");
        session.set_custom_price("abc");
        assert_eq!(session.params().food.price, FoodPrice::Custom(3.75));
        session.select_food_tier(FoodTier::Premium);
        assert_eq!(session.params().food.price, FoodPrice::Tier(FoodTier::Premium));
        assert_eq!(session.custom_price_input(), "");
        session.set_custom_price("0");
        assert_eq!(session.params().food.price, FoodPrice::Custom(0.01));
        session.set_custom_price("  ");
        assert_eq!(session.params().food.price, FoodPrice::Tier(FoodTier::Premium));
    }

    #[test]
    fn clearing_custom_price_returns_to_the_chosen_tier() {
        let mut session = EstimatorSession::new();
        session.set_custom_price("5");
        session.set_custom_price("");
        assert_eq!(session.params().food.price, FoodPrice::Tier(FoodTier::MidRange));

        session.select_food_tier(FoodTier::Economy);
        session.set_custom_price("5");
        assert_eq!(session.params().food.price, FoodPrice::Custom(5.0));
        session.close_detail();
        session.open_detail(CostCategory::Food);
        session.set_custom_price("");
        assert_eq!(session.params().food.price, FoodPrice::Tier(FoodTier::Economy));
        assert_eq!(session.custom_price_input(), "");
    }

    #[test]
    fn weight_reset_drops_overrides() {
        let mut session = EstimatorSession::new();
        session.set_weight_input("50", WeightUnit::Lbs);
        session.set_override(CostCategory::Food, "10");
        session.set_override(CostCategory::Grooming, "20");
        assert!(session.apply(SessionAction::ResetWeight));
        assert_eq!(session.params().food.weight_lbs, None);
        assert!(session.overrides().is_empty());
        assert_eq!(session.breakdown().monthly.get(CostCategory::Food), Some(42));
    }

    #[test]
    fn overrides_survive_navigation() {
        let mut session = EstimatorSession::new();
        session.open_detail(CostCategory::Grooming);
        session.set_override(CostCategory::Grooming, "80");
        session.switch_detail(CostCategory::Food);
        session.close_detail();
        session.open_detail(CostCategory::Grooming);
        let panel = session.detail_panel().unwrap();
        assert_eq!(panel.override_text.as_deref(), Some("80"));
        assert_eq!(panel.value, 80);
        assert_eq!(panel.computed, 50);
    }

    #[test]
    fn changing_the_dog_resets_weight_and_overrides() {
        let catalog = BreedCatalog::load_from_static();
        let mut session = EstimatorSession::new();
        session.set_weight_input("42", WeightUnit::Lbs);
        session.set_override(CostCategory::Food, "10");
        session.select_breed(catalog.find("Great Dane").cloned().unwrap());
        assert_eq!(session.params().size, SizeCategory::Giant);
        assert_eq!(session.params().food.weight_lbs, None);
        assert!(session.overrides().is_empty());

        session.set_override(CostCategory::Food, "10");
        session.set_size(SizeCategory::Small);
        assert!(session.params().breed.is_none());
        assert!(session.overrides().is_empty());
    }

    #[test]
    fn apply_reports_changes() {
        let mut session = EstimatorSession::new();
        assert!(session.apply(SessionAction::SetAge { years: 40 }));
        assert_eq!(session.params().insurance.age_years, 20);
        assert!(!session.apply(SessionAction::SetAge { years: 25 }));
        assert!(!session.apply(SessionAction::SetEnabled {
            category: CostCategory::Food,
            enabled: false,
        }));
        assert!(session.apply(SessionAction::SetDeductible {
            deductible: Deductible::Usd1000,
        }));
    }

    #[test]
    fn actions_deserialize_from_json() {
        let action: SessionAction =
            serde_json::from_str(r#"{"action":"set_override","category":"food","text":"50"}"#).unwrap();
        assert_eq!(
            action,
            SessionAction::SetOverride {
                category: CostCategory::Food,
                text: "50".into(),
            }
        );
        let weight: SessionAction =
            serde_json::from_str(r#"{"action":"set_weight_input","text":"20"}"#).unwrap();
        assert_eq!(
            weight,
            SessionAction::SetWeightInput {
                text: "20".into(),
                unit: WeightUnit::Lbs,
            }
        );
    }
}
