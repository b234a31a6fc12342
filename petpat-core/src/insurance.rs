//! Insurance premium rating.
use serde::{Deserialize, Serialize};

use crate::constants::{
    AGE_BANDS, AGE_FACTOR_SENIOR, HIGH_RISK_SURCHARGE, INSURANCE_AGE_MAX, INSURANCE_BAND_HIGH,
    INSURANCE_BAND_LOW, INSURANCE_BASE_PREMIUM,
};
use crate::numbers::round_currency;
use crate::tables::{AnnualLimit, CostLevel, Deductible, Reimbursement, SizeCategory};

/// Plan structure choices made in the insurance detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InsurancePlan {
    #[serde(default)]
    pub reimbursement: Reimbursement,
    #[serde(default)]
    pub deductible: Deductible,
    #[serde(default)]
    pub annual_limit: AnnualLimit,
}

impl InsurancePlan {
    /// Combined plan factor (reimbursement × deductible × limit).
    #[must_use]
    pub fn factor(self) -> f64 {
        self.reimbursement.factor() * self.deductible.factor() * self.annual_limit.factor()
    }
}

/// Individual rating factors, surfaced in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PremiumFactors {
    pub base: f64,
    pub age: f64,
    pub breed: f64,
    pub region: f64,
    pub reimbursement: f64,
    pub deductible: f64,
    pub annual_limit: f64,
}

impl PremiumFactors {
    #[must_use]
    pub fn plan(&self) -> f64 {
        self.reimbursement * self.deductible * self.annual_limit
    }

    #[must_use]
    pub fn product(&self) -> f64 {
        self.base * self.age * self.breed * self.region * self.plan()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InsuranceQuote {
    pub estimate: u64,
    pub low: u64,
    pub high: u64,
    /// Unrounded monthly premium.
    pub raw: f64,
    pub factors: PremiumFactors,
}

/// Clamp an age to the rated range.
#[must_use]
pub fn clamp_age(age_years: i64) -> u8 {
    u8::try_from(age_years.clamp(0, i64::from(INSURANCE_AGE_MAX))).unwrap_or(INSURANCE_AGE_MAX)
}

/// Age factor from ascending bands; first upper bound that holds wins.
#[must_use]
pub fn age_factor(age_years: u8) -> f64 {
    AGE_BANDS
        .iter()
        .find(|(max_age, _)| age_years <= *max_age)
        .map_or(AGE_FACTOR_SENIOR, |(_, factor)| *factor)
}

#[must_use]
pub fn breed_factor(size: SizeCategory, high_risk: bool) -> f64 {
    let base = size.insurance_factor();
    if high_risk {
        base * HIGH_RISK_SURCHARGE
    } else {
        base
    }
}

/// Compute the monthly premium estimate and its display band.
///
/// The band is derived from the unrounded premium so each bound rounds once.
#[must_use]
pub fn calc_insurance_premium(
    age_years: u8,
    size: SizeCategory,
    cost_level: CostLevel,
    high_risk: bool,
    reimbursement_factor: f64,
    deductible_factor: f64,
    limit_factor: f64,
) -> InsuranceQuote {
    let factors = PremiumFactors {
        base: INSURANCE_BASE_PREMIUM,
        age: age_factor(age_years.min(INSURANCE_AGE_MAX)),
        breed: breed_factor(size, high_risk),
        region: cost_level.insurance_region_factor(),
        reimbursement: reimbursement_factor,
        deductible: deductible_factor,
        annual_limit: limit_factor,
    };
    let raw = factors.product();
    InsuranceQuote {
        estimate: round_currency(raw),
        low: round_currency(raw * INSURANCE_BAND_LOW),
        high: round_currency(raw * INSURANCE_BAND_HIGH),
        raw,
        factors,
    }
}

/// Rate a plan using its enumerated choices.
#[must_use]
pub fn quote_plan(
    age_years: u8,
    size: SizeCategory,
    cost_level: CostLevel,
    high_risk: bool,
    plan: InsurancePlan,
) -> InsuranceQuote {
    calc_insurance_premium(
        age_years,
        size,
        cost_level,
        high_risk,
        plan.reimbursement.factor(),
        plan.deductible.factor(),
        plan.annual_limit.factor(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bands_are_checked_in_order() {
        assert!((age_factor(0) - 0.8).abs() < f64::EPSILON);
        assert!((age_factor(1) - 0.8).abs() < f64::EPSILON);
        assert!((age_factor(2) - 1.0).abs() < f64::EPSILON);
        assert!((age_factor(5) - 1.0).abs() < f64::EPSILON);
        assert!((age_factor(8) - 1.4).abs() < f64::EPSILON);
        assert!((age_factor(11) - 1.9).abs() < f64::EPSILON);
        assert!((age_factor(12) - 2.5).abs() < f64::EPSILON);
        assert!((age_factor(20) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn age_is_clamped_both_directions() {
        assert_eq!(clamp_age(-3), 0);
        assert_eq!(clamp_age(7), 7);
        assert_eq!(clamp_age(45), 20);
    }

    #[test]
    fn default_plan_for_medium_average_dog() {
        let quote = quote_plan(2, SizeCategory::Medium, CostLevel::Average, false, InsurancePlan::default());
        assert_eq!(quote.estimate, 40);
        assert_eq!(quote.low, 34);
        assert_eq!(quote.high, 46);
    }

    #[test]
    fn high_risk_giant_in_expensive_region() {
        let quote = quote_plan(9, SizeCategory::Giant, CostLevel::VeryHigh, true, InsurancePlan::default());
        let expected = 40.0 * 1.9 * 1.2 * 1.25 * 1.4;
        assert!((quote.raw - expected).abs() < 1e-9);
        assert_eq!(quote.estimate, 160);
        assert!((quote.factors.breed - 1.5).abs() < 1e-12);
    }

    #[test]
    fn band_uses_unrounded_premium() {
        let quote = calc_insurance_premium(2, SizeCategory::Small, CostLevel::Low, false, 1.0, 1.0, 1.0);
        let raw = 40.0 * 0.95 * 0.85;
        assert_eq!(quote.estimate, 32);
        assert_eq!(quote.low, round_currency(raw * 0.85));
        assert_eq!(quote.high, round_currency(raw * 1.15));
    }

    #[test]
    fn premium_scales_with_each_factor() {
        let base = calc_insurance_premium(3, SizeCategory::Large, CostLevel::High, false, 1.0, 1.0, 1.0);
        let doubled = calc_insurance_premium(3, SizeCategory::Large, CostLevel::High, false, 1.0, 2.0, 1.0);
        assert!((doubled.raw / base.raw - 2.0).abs() < 1e-12);
    }
}
