//! The user's scenario: every choice that feeds the estimator.
use serde::{Deserialize, Serialize};

use crate::breakdown::CostCategory;
use crate::breeds::Breed;
use crate::constants::DEFAULT_DOG_AGE;
use crate::food::{FoodCalc, FoodPrice, calc_food, clamp_weight_lbs};
use crate::insurance::{InsurancePlan, InsuranceQuote, quote_plan};
use crate::tables::{AcquisitionMethod, ActivityLevel, CostLevel, SizeCategory};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FoodParams {
    /// Explicit body weight in lbs; `None` uses the breed or size default.
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    #[serde(default)]
    pub activity: ActivityLevel,
    #[serde(default)]
    pub price: FoodPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceParams {
    #[serde(default = "default_age")]
    pub age_years: u8,
    #[serde(default)]
    pub plan: InsurancePlan,
}

impl Default for InsuranceParams {
    fn default() -> Self {
        Self {
            age_years: DEFAULT_DOG_AGE,
            plan: InsurancePlan::default(),
        }
    }
}

const fn default_age() -> u8 {
    DEFAULT_DOG_AGE
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScenarioParameters {
    #[serde(default)]
    pub size: SizeCategory,
    #[serde(default)]
    pub cost_level: CostLevel,
    #[serde(default)]
    pub acquisition: AcquisitionMethod,
    #[serde(default)]
    pub breed: Option<Breed>,
    #[serde(default)]
    pub include_insurance: bool,
    #[serde(default)]
    pub include_training: bool,
    #[serde(default = "default_true")]
    pub include_treats: bool,
    #[serde(default = "default_true")]
    pub include_grooming: bool,
    #[serde(default = "default_true")]
    pub include_toys_supplies: bool,
    #[serde(default)]
    pub food: FoodParams,
    #[serde(default)]
    pub insurance: InsuranceParams,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            size: SizeCategory::default(),
            cost_level: CostLevel::default(),
            acquisition: AcquisitionMethod::default(),
            breed: None,
            include_insurance: false,
            include_training: false,
            include_treats: true,
            include_grooming: true,
            include_toys_supplies: true,
            food: FoodParams::default(),
            insurance: InsuranceParams::default(),
        }
    }
}

impl ScenarioParameters {
    /// Scenario seeded from a breed: its size class, weight left at the breed default.
    #[must_use]
    pub fn for_breed(breed: Breed) -> Self {
        Self {
            size: breed.size(),
            breed: Some(breed),
            ..Self::default()
        }
    }

    /// Weight used when no explicit weight is set.
    #[must_use]
    pub fn default_weight_lbs(&self) -> f64 {
        self.breed
            .as_ref()
            .map_or_else(|| self.size.default_weight_lbs(), Breed::default_weight_lbs)
    }

    /// Clamped weight fed into the food formula.
    #[must_use]
    pub fn effective_weight_lbs(&self) -> f64 {
        clamp_weight_lbs(self.food.weight_lbs.unwrap_or_else(|| self.default_weight_lbs()))
    }

    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.breed.as_ref().is_some_and(Breed::is_high_risk)
    }

    /// Whether a category counts toward the headline totals.
    #[must_use]
    pub const fn is_enabled(&self, category: CostCategory) -> bool {
        match category {
            CostCategory::Treats => self.include_treats,
            CostCategory::Grooming => self.include_grooming,
            CostCategory::ToysSupplies => self.include_toys_supplies,
            CostCategory::Insurance => self.include_insurance,
            CostCategory::TrainingClasses => self.include_training,
            CostCategory::AdoptionFee => matches!(self.acquisition, AcquisitionMethod::Adopt),
            CostCategory::PurchasePrice => matches!(self.acquisition, AcquisitionMethod::Buy),
            _ => true,
        }
    }

    /// Flip the toggle behind an optional category. Returns `false` for
    /// categories that cannot be switched off.
    pub fn set_enabled(&mut self, category: CostCategory, enabled: bool) -> bool {
        let slot = match category {
            CostCategory::Treats => &mut self.include_treats,
            CostCategory::Grooming => &mut self.include_grooming,
            CostCategory::ToysSupplies => &mut self.include_toys_supplies,
            CostCategory::Insurance => &mut self.include_insurance,
            CostCategory::TrainingClasses => &mut self.include_training,
            _ => return false,
        };
        *slot = enabled;
        true
    }

    #[must_use]
    pub fn food_calc(&self) -> FoodCalc {
        calc_food(
            self.effective_weight_lbs(),
            self.food.activity.factor(),
            self.food.price.price_per_lb(),
        )
    }

    #[must_use]
    pub fn insurance_quote(&self) -> InsuranceQuote {
        quote_plan(
            self.insurance.age_years,
            self.size,
            self.cost_level,
            self.is_high_risk(),
            self.insurance.plan,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::BreedCatalog;

    #[test]
    fn defaults_match_first_render() {
        let params = ScenarioParameters::default();
        assert_eq!(params.size, SizeCategory::Medium);
        assert_eq!(params.cost_level, CostLevel::Average);
        assert_eq!(params.acquisition, AcquisitionMethod::Adopt);
        assert!(!params.include_insurance);
        assert!(!params.include_training);
        assert!(params.include_treats && params.include_grooming && params.include_toys_supplies);
        assert_eq!(params.insurance.age_years, 2);
        assert!((params.effective_weight_lbs() - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn breed_supplies_size_and_weight() {
        let catalog = BreedCatalog::load_from_static();
        let pug = catalog.find("Pug").cloned().unwrap();
        let params = ScenarioParameters::for_breed(pug);
        assert_eq!(params.size, SizeCategory::Small);
        assert!((params.effective_weight_lbs() - 16.0).abs() < f64::EPSILON);
        assert!(params.is_high_risk());
    }

    #[test]
    fn explicit_weight_is_clamped() {
        let mut params = ScenarioParameters::default();
        params.food.weight_lbs = Some(0.2);
        assert!((params.effective_weight_lbs() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn core_categories_cannot_be_disabled() {
        let mut params = ScenarioParameters::default();
        assert!(!params.set_enabled(CostCategory::Food, false));
        assert!(params.is_enabled(CostCategory::Food));
        assert!(params.set_enabled(CostCategory::Insurance, true));
        assert!(params.is_enabled(CostCategory::Insurance));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let params: ScenarioParameters = serde_json::from_str(r#"{"size":"giant"}"#).unwrap();
        assert_eq!(params.size, SizeCategory::Giant);
        assert!(params.include_treats);
        assert_eq!(params.insurance.age_years, 2);
    }
}
