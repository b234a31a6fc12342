//! Cost aggregation: turns a scenario into one-time, monthly and annual sections.
//!
//! Monthly categories are computed once into a list of lines that carry both
//! the computed and the effective (post-override) value plus the toggle state.
//! Every monthly view is a projection of that list, so the headline totals and
//! the detail panel can never disagree.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{LIFETIME_YEARS, LOG_BREAKDOWN_COMPUTED, LOG_OVERRIDE_APPLIED, MONTHS_PER_YEAR};
use crate::debug_log_enabled;
use crate::food::FoodCalc;
use crate::insurance::InsuranceQuote;
use crate::numbers::round_currency;
use crate::overrides::OverrideMap;
use crate::scenario::ScenarioParameters;
use crate::tables::{AcquisitionMethod, CostTables};

static COST_TABLES: Lazy<CostTables> = Lazy::new(CostTables::default_config);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostKind {
    OneTime,
    Monthly,
    AnnualFixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    Food,
    PreventiveMeds,
    Treats,
    Grooming,
    ToysSupplies,
    Insurance,
    AdoptionFee,
    PurchasePrice,
    SpayNeuter,
    FirstVetVisit,
    Microchip,
    StarterSupplies,
    TrainingClasses,
    AnnualVet,
    Vaccines,
    Dental,
    License,
}

keyed_enum!(CostCategory {
    Food => "food",
    PreventiveMeds => "preventiveMeds",
    Treats => "treats",
    Grooming => "grooming",
    ToysSupplies => "toysSupplies",
    Insurance => "insurance",
    AdoptionFee => "adoptionFee",
    PurchasePrice => "purchasePrice",
    SpayNeuter => "spayNeuter",
    FirstVetVisit => "firstVetVisit",
    Microchip => "microchip",
    StarterSupplies => "starterSupplies",
    TrainingClasses => "trainingClasses",
    AnnualVet => "annualVet",
    Vaccines => "vaccines",
    Dental => "dental",
    License => "license",
});

impl CostCategory {
    /// Monthly categories in display order.
    pub const MONTHLY: [Self; 6] = [
        Self::Food,
        Self::PreventiveMeds,
        Self::Treats,
        Self::Grooming,
        Self::ToysSupplies,
        Self::Insurance,
    ];

    #[must_use]
    pub const fn kind(self) -> CostKind {
        match self {
            Self::Food
            | Self::PreventiveMeds
            | Self::Treats
            | Self::Grooming
            | Self::ToysSupplies
            | Self::Insurance => CostKind::Monthly,
            Self::AdoptionFee
            | Self::PurchasePrice
            | Self::SpayNeuter
            | Self::FirstVetVisit
            | Self::Microchip
            | Self::StarterSupplies
            | Self::TrainingClasses => CostKind::OneTime,
            Self::AnnualVet | Self::Vaccines | Self::Dental | Self::License => CostKind::AnnualFixed,
        }
    }

    #[must_use]
    pub const fn is_monthly(self) -> bool {
        matches!(self.kind(), CostKind::Monthly)
    }

    /// Whether the user can switch this category off.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(
            self,
            Self::Treats | Self::Grooming | Self::ToysSupplies | Self::Insurance | Self::TrainingClasses
        )
    }

    /// Canonical English label, used as the fallback when no translation exists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::PreventiveMeds => "Preventive Meds",
            Self::Treats => "Treats",
            Self::Grooming => "Grooming",
            Self::ToysSupplies => "Toys & Supplies",
            Self::Insurance => "Insurance",
            Self::AdoptionFee => "Adoption Fee",
            Self::PurchasePrice => "Purchase Price",
            Self::SpayNeuter => "Spay/Neuter",
            Self::FirstVetVisit => "First Vet Visit",
            Self::Microchip => "Microchip",
            Self::StarterSupplies => "Starter Supplies",
            Self::TrainingClasses => "Training Classes",
            Self::AnnualVet => "Annual Vet Checkup",
            Self::Vaccines => "Vaccines",
            Self::Dental => "Dental Cleaning",
            Self::License => "License",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> String {
        format!("category.{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub category: CostCategory,
    pub value: u64,
}

/// An ordered list of items whose total is always the sum of the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CostSection {
    items: SmallVec<[CostItem; 8]>,
    total: u64,
}

impl CostSection {
    #[must_use]
    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn get(&self, category: CostCategory) -> Option<u64> {
        self.items
            .iter()
            .find(|item| item.category == category)
            .map(|item| item.value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<CostItem> for CostSection {
    fn from_iter<I: IntoIterator<Item = CostItem>>(iter: I) -> Self {
        let items: SmallVec<[CostItem; 8]> = iter.into_iter().collect();
        let total = items
            .iter()
            .fold(0_u64, |acc, item| acc.saturating_add(item.value));
        Self { items, total }
    }
}

/// One monthly category with both of its values and its toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLine {
    pub category: CostCategory,
    pub computed: u64,
    pub value: u64,
    pub enabled: bool,
    pub overridden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CostSummary {
    pub monthly: u64,
    pub annual: u64,
    pub first_year: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LifetimeProjection {
    pub year5: u64,
    pub year10: u64,
    pub year15: u64,
}

/// Total cost of ownership through year `years` (`years >= 1`).
#[must_use]
pub fn project_years(summary: &CostSummary, years: u64) -> u64 {
    summary.first_year.saturating_add(
        summary
            .annual
            .saturating_mul(years.saturating_sub(1)),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    pub one_time: CostSection,
    /// Enabled monthly categories after overrides; drives the headline totals.
    pub monthly: CostSection,
    /// Every monthly category after overrides, regardless of toggles.
    pub monthly_all: CostSection,
    /// Every monthly category before overrides.
    pub monthly_computed: CostSection,
    pub annual_fixed: CostSection,
    pub lines: SmallVec<[MonthlyLine; 6]>,
    pub summary: CostSummary,
    pub lifetime: LifetimeProjection,
}

impl CostBreakdown {
    #[must_use]
    pub fn line(&self, category: CostCategory) -> Option<&MonthlyLine> {
        self.lines.iter().find(|line| line.category == category)
    }

    /// Enabled monthly categories before overrides.
    #[must_use]
    pub fn monthly_enabled_computed(&self) -> CostSection {
        self.lines
            .iter()
            .filter(|line| line.enabled)
            .map(|line| CostItem {
                category: line.category,
                value: line.computed,
            })
            .collect()
    }
}

/// Price a scenario using the bundled cost tables.
#[must_use]
pub fn compute_breakdown(
    params: &ScenarioParameters,
    food: &FoodCalc,
    insurance: &InsuranceQuote,
    overrides: &OverrideMap,
) -> CostBreakdown {
    compute_breakdown_with(&COST_TABLES, params, food, insurance, overrides)
}

/// Price a scenario against an explicit set of cost tables.
#[must_use]
pub fn compute_breakdown_with(
    tables: &CostTables,
    params: &ScenarioParameters,
    food: &FoodCalc,
    insurance: &InsuranceQuote,
    overrides: &OverrideMap,
) -> CostBreakdown {
    let row = tables.for_size(params.size);
    let mult = params.cost_level.multiplier();
    let scaled = |base: f64| round_currency(base * mult);

    let acquisition = match params.acquisition {
        AcquisitionMethod::Adopt => (CostCategory::AdoptionFee, row.adoption_fee),
        AcquisitionMethod::Buy => (CostCategory::PurchasePrice, row.purchase_price),
    };
    let training = params
        .include_training
        .then_some((CostCategory::TrainingClasses, row.training_classes));
    let one_time: CostSection = [
        acquisition,
        (CostCategory::SpayNeuter, row.spay_neuter),
        (CostCategory::FirstVetVisit, row.first_vet_visit),
        (CostCategory::Microchip, row.microchip),
        (CostCategory::StarterSupplies, row.starter_supplies.sum()),
    ]
    .into_iter()
    .chain(training)
    .map(|(category, base)| CostItem {
        category,
        value: scaled(base),
    })
    .collect();

    let lines: SmallVec<[MonthlyLine; 6]> = CostCategory::MONTHLY
        .into_iter()
        .map(|category| {
            let computed = match category {
                CostCategory::Food => round_currency(food.monthly_cost),
                CostCategory::PreventiveMeds => scaled(row.monthly.preventive_meds),
                CostCategory::Treats => scaled(row.monthly.treats),
                CostCategory::Grooming => scaled(row.monthly.grooming),
                CostCategory::ToysSupplies => scaled(row.monthly.toys + row.monthly.waste_bags),
                _ => insurance.estimate,
            };
            let manual = overrides.value(category);
            if let Some(value) = manual
                && debug_log_enabled()
            {
                log::debug!("{LOG_OVERRIDE_APPLIED} {category} computed={computed} override={value}");
            }
            MonthlyLine {
                category,
                computed,
                value: manual.unwrap_or(computed),
                enabled: params.is_enabled(category),
                overridden: manual.is_some(),
            }
        })
        .collect();

    let project = |keep: fn(&MonthlyLine) -> bool, pick: fn(&MonthlyLine) -> u64| -> CostSection {
        lines
            .iter()
            .filter(|line| keep(line))
            .map(|line| CostItem {
                category: line.category,
                value: pick(line),
            })
            .collect()
    };
    let monthly = project(|line| line.enabled, |line| line.value);
    let monthly_all = project(|_| true, |line| line.value);
    let monthly_computed = project(|_| true, |line| line.computed);

    let annual_fixed: CostSection = [
        (CostCategory::AnnualVet, row.annual.vet_checkup),
        (CostCategory::Vaccines, row.annual.vaccines),
        (CostCategory::Dental, row.annual.dental),
        (CostCategory::License, row.annual.license),
    ]
    .into_iter()
    .map(|(category, base)| CostItem {
        category,
        value: scaled(base),
    })
    .collect();

    let annual = monthly
        .total()
        .saturating_mul(MONTHS_PER_YEAR)
        .saturating_add(annual_fixed.total());
    let summary = CostSummary {
        monthly: monthly.total(),
        annual,
        first_year: annual.saturating_add(one_time.total()),
    };
    let [five, ten, fifteen] = LIFETIME_YEARS;
    let lifetime = LifetimeProjection {
        year5: project_years(&summary, five),
        year10: project_years(&summary, ten),
        year15: project_years(&summary, fifteen),
    };

    if debug_log_enabled() {
        log::debug!(
            "{LOG_BREAKDOWN_COMPUTED} size={} level={} monthly={} annual={} first_year={}",
            params.size,
            params.cost_level,
            summary.monthly,
            summary.annual,
            summary.first_year
        );
    }

    CostBreakdown {
        one_time,
        monthly,
        monthly_all,
        monthly_computed,
        annual_fixed,
        lines,
        summary,
        lifetime,
    }
}

/// Everything the calculator page renders for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Estimate {
    pub food: FoodCalc,
    pub insurance: InsuranceQuote,
    pub breakdown: CostBreakdown,
}

/// Run the food and insurance calculators, then aggregate.
#[must_use]
pub fn estimate(params: &ScenarioParameters, overrides: &OverrideMap) -> Estimate {
    let food = params.food_calc();
    let insurance = params.insurance_quote();
    let breakdown = compute_breakdown(params, &food, &insurance, overrides);
    Estimate {
        food,
        insurance,
        breakdown,
    }
}
