//! Drill-down state and the view model for a single monthly category.
use serde::{Deserialize, Serialize};

use crate::breakdown::{CostCategory, Estimate};
use crate::food::{FoodCalc, FoodPrice};
use crate::insurance::{InsurancePlan, InsuranceQuote};
use crate::overrides::OverrideMap;
use crate::scenario::ScenarioParameters;
use crate::tables::{ActivityLevel, CostLevel, SizeCategory};

/// Which monthly category, if any, is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "category", rename_all = "lowercase")]
pub enum DetailView {
    #[default]
    Collapsed,
    Detail(CostCategory),
}

impl DetailView {
    #[must_use]
    pub const fn selected(self) -> Option<CostCategory> {
        match self {
            Self::Collapsed => None,
            Self::Detail(category) => Some(category),
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Detail(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetail {
    pub calc: FoodCalc,
    pub activity: ActivityLevel,
    pub price: FoodPrice,
    pub default_weight_lbs: f64,
    /// `true` when no explicit weight has been entered.
    pub weight_is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceDetail {
    pub quote: InsuranceQuote,
    pub age_years: u8,
    pub plan: InsurancePlan,
    pub size: SizeCategory,
    pub cost_level: CostLevel,
    pub high_risk: bool,
    pub breed_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailBody {
    Food(FoodDetail),
    Insurance(InsuranceDetail),
    Fixed,
}

/// Everything the detail panel shows for the selected category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailPanel {
    pub category: CostCategory,
    pub computed: u64,
    pub value: u64,
    pub override_text: Option<String>,
    pub overridden: bool,
    /// Whether the category is switched on and therefore part of the headline total.
    pub counts_toward_total: bool,
    pub body: DetailBody,
}

impl DetailPanel {
    /// Build the panel for `category` from a finished estimate.
    ///
    /// Returns `None` for categories without a monthly line.
    #[must_use]
    pub fn build(
        category: CostCategory,
        params: &ScenarioParameters,
        overrides: &OverrideMap,
        estimate: &Estimate,
    ) -> Option<Self> {
        let line = estimate.breakdown.line(category)?;
        let body = match category {
            CostCategory::Food => DetailBody::Food(FoodDetail {
                calc: estimate.food,
                activity: params.food.activity,
                price: params.food.price,
                default_weight_lbs: params.default_weight_lbs(),
                weight_is_default: params.food.weight_lbs.is_none(),
            }),
            CostCategory::Insurance => DetailBody::Insurance(InsuranceDetail {
                quote: estimate.insurance,
                age_years: params.insurance.age_years,
                plan: params.insurance.plan,
                size: params.size,
                cost_level: params.cost_level,
                high_risk: params.is_high_risk(),
                breed_name: params.breed.as_ref().map(|b| b.name_en.clone()),
            }),
            _ => DetailBody::Fixed,
        };
        Some(Self {
            category,
            computed: line.computed,
            value: line.value,
            override_text: overrides.raw(category).map(str::to_string),
            overridden: line.overridden,
            counts_toward_total: line.enabled,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::estimate;

    #[test]
    fn collapsed_has_no_selection() {
        assert_eq!(DetailView::default().selected(), None);
        assert!(!DetailView::Collapsed.is_open());
        assert_eq!(
            DetailView::Detail(CostCategory::Grooming).selected(),
            Some(CostCategory::Grooming)
        );
    }

    #[test]
    fn panels_only_exist_for_monthly_categories() {
        let params = ScenarioParameters::default();
        let overrides = OverrideMap::new();
        let est = estimate(&params, &overrides);
        assert!(DetailPanel::build(CostCategory::Microchip, &params, &overrides, &est).is_none());
        let panel = DetailPanel::build(CostCategory::Grooming, &params, &overrides, &est).unwrap();
        assert_eq!(panel.body, DetailBody::Fixed);
        assert_eq!(panel.value, 50);
        assert!(panel.counts_toward_total);
    }

    #[test]
    fn insurance_panel_reports_toggle_and_factors() {
        let params = ScenarioParameters::default();
        let overrides = OverrideMap::new();
        let est = estimate(&params, &overrides);
        let panel = DetailPanel::build(CostCategory::Insurance, &params, &overrides, &est).unwrap();
        assert!(!panel.counts_toward_total);
        let DetailBody::Insurance(detail) = panel.body else {
            panic!("expected insurance detail");
        };
        assert_eq!(detail.quote.estimate, 40);
        assert_eq!(detail.age_years, 2);
        assert_eq!(detail.breed_name, None);
    }
}
