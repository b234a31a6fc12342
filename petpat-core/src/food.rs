//! Food metabolic calculator.
//!
//! Converts body weight into a monthly dry-food bill through the resting and
//! maintenance energy requirements. All formula constants are in kilograms;
//! prices are per lb.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DAYS_PER_MONTH, KCAL_PER_KG_FOOD, LBS_TO_KG, MIN_CUSTOM_PRICE_PER_LB, MIN_WEIGHT_LBS,
    RER_COEFFICIENT, RER_EXPONENT,
};
use crate::tables::FoodTier;

/// Food price choice: a catalog tier or a user-entered price per lb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FoodPrice {
    Tier(FoodTier),
    Custom(f64),
}

impl Default for FoodPrice {
    fn default() -> Self {
        Self::Tier(FoodTier::default())
    }
}

impl FoodPrice {
    /// Build a custom price, clamped to the minimum billable price.
    #[must_use]
    pub fn custom(price_per_lb: f64) -> Self {
        Self::Custom(clamp_custom_price(price_per_lb))
    }

    #[must_use]
    pub fn price_per_lb(self) -> f64 {
        match self {
            Self::Tier(tier) => tier.price_per_lb(),
            Self::Custom(price) => clamp_custom_price(price),
        }
    }

    #[must_use]
    pub const fn tier(self) -> Option<FoodTier> {
        match self {
            Self::Tier(tier) => Some(tier),
            Self::Custom(_) => None,
        }
    }
}

fn clamp_custom_price(price: f64) -> f64 {
    if price.is_finite() {
        price.max(MIN_CUSTOM_PRICE_PER_LB)
    } else {
        MIN_CUSTOM_PRICE_PER_LB
    }
}

/// Clamp a body weight to the supported minimum; non-finite input becomes the minimum.
#[must_use]
pub fn clamp_weight_lbs(weight_lbs: f64) -> f64 {
    if weight_lbs.is_finite() {
        weight_lbs.max(MIN_WEIGHT_LBS)
    } else {
        MIN_WEIGHT_LBS
    }
}

/// Every intermediate step of the food formula, kept for the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FoodCalc {
    pub weight_lbs: f64,
    pub weight_kg: f64,
    pub rer_kcal: f64,
    pub activity_factor: f64,
    pub mer_kcal: f64,
    pub daily_food_kg: f64,
    pub monthly_food_kg: f64,
    pub monthly_food_lbs: f64,
    pub price_per_lb: f64,
    pub monthly_cost: f64,
}

/// Compute the monthly food cost for a dog.
///
/// The weight is clamped to at least 1 lb before any math runs.
#[must_use]
pub fn calc_food(weight_lbs: f64, activity_factor: f64, price_per_lb: f64) -> FoodCalc {
    let weight_lbs = clamp_weight_lbs(weight_lbs);
    let weight_kg = weight_lbs * LBS_TO_KG;
    let rer_kcal = RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT);
    let mer_kcal = rer_kcal * activity_factor;
    let daily_food_kg = mer_kcal / KCAL_PER_KG_FOOD;
    let monthly_food_kg = daily_food_kg * DAYS_PER_MONTH;
    let monthly_food_lbs = monthly_food_kg / LBS_TO_KG;
    let monthly_cost = monthly_food_lbs * price_per_lb;
    FoodCalc {
        weight_lbs,
        weight_kg,
        rer_kcal,
        activity_factor,
        mer_kcal,
        daily_food_kg,
        monthly_food_kg,
        monthly_food_lbs,
        price_per_lb,
        monthly_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ActivityLevel;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn medium_neutered_mid_range_matches_hand_calculation() {
        let calc = calc_food(35.0, ActivityLevel::Neutered.factor(), FoodTier::MidRange.price_per_lb());
        let kg: f64 = 35.0 * 0.453_592;
        let rer = 70.0 * kg.powf(0.75);
        let mer = rer * 1.6;
        let monthly_lbs = mer / 3600.0 * 30.44 / 0.453_592;
        assert!(close(calc.weight_kg, kg));
        assert!(close(calc.rer_kcal, rer));
        assert!(close(calc.mer_kcal, mer));
        assert!(close(calc.monthly_food_lbs, monthly_lbs));
        assert!(close(calc.monthly_cost, monthly_lbs * 2.5));
        assert!(calc.monthly_cost > 35.0 && calc.monthly_cost < 50.0);
    }

    #[test]
    fn weight_is_clamped_before_math() {
        let zero = calc_food(0.0, 1.6, 2.5);
        let negative = calc_food(-12.0, 1.6, 2.5);
        let nan = calc_food(f64::NAN, 1.6, 2.5);
        let one = calc_food(1.0, 1.6, 2.5);
        assert!(close(zero.weight_lbs, 1.0));
        assert_eq!(zero, one);
        assert_eq!(negative, one);
        assert_eq!(nan, one);
    }

    #[test]
    fn custom_price_is_clamped() {
        assert!(close(FoodPrice::custom(0.0).price_per_lb(), 0.01));
        assert!(close(FoodPrice::custom(-3.0).price_per_lb(), 0.01));
        assert!(close(FoodPrice::Custom(f64::NAN).price_per_lb(), 0.01));
        assert!(close(FoodPrice::custom(3.25).price_per_lb(), 3.25));
        assert!(close(FoodPrice::default().price_per_lb(), 2.5));
        assert_eq!(FoodPrice::custom(3.0).tier(), None);
    }

    #[test]
    fn food_price_serializes_as_tagged_choice() {
        let json = serde_json::to_string(&FoodPrice::Tier(FoodTier::Premium)).unwrap();
        assert_eq!(json, r#"{"kind":"tier","value":"premium"}"#);
        let custom: FoodPrice = serde_json::from_str(r#"{"kind":"custom","value":3.5}"#).unwrap();
        assert_eq!(custom, FoodPrice::Custom(3.5));
    }
}
