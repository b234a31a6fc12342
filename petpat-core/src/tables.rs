//! Reference tables: size-indexed base costs and every selectable factor.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const DEFAULT_COST_TABLES: &str =
    include_str!("../../petpat-web/static/assets/data/cost_tables.json");

/// Parse a selection key, falling back to the type's default for unknown keys.
#[must_use]
pub fn parse_or_default<T>(key: &str) -> T
where
    T: FromStr + Default,
{
    key.trim().parse().unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
    Giant,
}

keyed_enum!(SizeCategory {
    Small => "small",
    Medium => "medium",
    Large => "large",
    Giant => "giant",
});

impl SizeCategory {
    /// Body weight assumed when no breed or explicit weight is chosen.
    #[must_use]
    pub const fn default_weight_lbs(self) -> f64 {
        match self {
            Self::Small => 15.0,
            Self::Medium => 35.0,
            Self::Large => 70.0,
            Self::Giant => 120.0,
        }
    }

    /// Per-size base used by the insurance breed factor.
    #[must_use]
    pub const fn insurance_factor(self) -> f64 {
        match self {
            Self::Small => 0.95,
            Self::Medium => 1.0,
            Self::Large => 1.1,
            Self::Giant => 1.2,
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Small => "size.small",
            Self::Medium => "size.medium",
            Self::Large => "size.large",
            Self::Giant => "size.giant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CostLevel {
    Low,
    #[default]
    Average,
    High,
    VeryHigh,
}

keyed_enum!(CostLevel {
    Low => "low",
    Average => "average",
    High => "high",
    VeryHigh => "veryHigh",
});

impl CostLevel {
    /// General regional multiplier applied to size-indexed base costs.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.85,
            Self::Average => 1.0,
            Self::High => 1.25,
            Self::VeryHigh => 1.5,
        }
    }

    /// Region factor used only inside the insurance premium formula.
    #[must_use]
    pub const fn insurance_region_factor(self) -> f64 {
        match self {
            Self::Low => 0.85,
            Self::Average => 1.0,
            Self::High => 1.2,
            Self::VeryHigh => 1.4,
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Low => "level.low",
            Self::Average => "level.average",
            Self::High => "level.high",
            Self::VeryHigh => "level.veryHigh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionMethod {
    #[default]
    Adopt,
    Buy,
}

keyed_enum!(AcquisitionMethod {
    Adopt => "adopt",
    Buy => "buy",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Inactive,
    #[default]
    Neutered,
    Intact,
    Active,
}

keyed_enum!(ActivityLevel {
    Inactive => "inactive",
    Neutered => "neutered",
    Intact => "intact",
    Active => "active",
});

impl ActivityLevel {
    /// Maintenance energy multiplier over the resting requirement.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Inactive => 1.0,
            Self::Neutered => 1.6,
            Self::Intact => 1.8,
            Self::Active => 2.0,
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Inactive => "activity.inactive",
            Self::Neutered => "activity.neutered",
            Self::Intact => "activity.intact",
            Self::Active => "activity.active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FoodTier {
    Economy,
    #[default]
    MidRange,
    Premium,
    SuperPremium,
}

keyed_enum!(FoodTier {
    Economy => "economy",
    MidRange => "midRange",
    Premium => "premium",
    SuperPremium => "superPremium",
});

impl FoodTier {
    /// Dry food price in dollars per lb.
    #[must_use]
    pub const fn price_per_lb(self) -> f64 {
        match self {
            Self::Economy => 1.5,
            Self::MidRange => 2.5,
            Self::Premium => 4.0,
            Self::SuperPremium => 6.0,
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Economy => "food.tier.economy",
            Self::MidRange => "food.tier.midRange",
            Self::Premium => "food.tier.premium",
            Self::SuperPremium => "food.tier.superPremium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Reimbursement {
    #[serde(rename = "70")]
    Pct70,
    #[default]
    #[serde(rename = "80")]
    Pct80,
    #[serde(rename = "90")]
    Pct90,
}

keyed_enum!(Reimbursement {
    Pct70 => "70",
    Pct80 => "80",
    Pct90 => "90",
});

impl Reimbursement {
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Pct70 => 0.85,
            Self::Pct80 => 1.0,
            Self::Pct90 => 1.2,
        }
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Pct70 => 70,
            Self::Pct80 => 80,
            Self::Pct90 => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Deductible {
    #[serde(rename = "100")]
    Usd100,
    #[default]
    #[serde(rename = "250")]
    Usd250,
    #[serde(rename = "500")]
    Usd500,
    #[serde(rename = "1000")]
    Usd1000,
}

keyed_enum!(Deductible {
    Usd100 => "100",
    Usd250 => "250",
    Usd500 => "500",
    Usd1000 => "1000",
});

impl Deductible {
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Usd100 => 1.2,
            Self::Usd250 => 1.0,
            Self::Usd500 => 0.85,
            Self::Usd1000 => 0.7,
        }
    }

    #[must_use]
    pub const fn dollars(self) -> u32 {
        match self {
            Self::Usd100 => 100,
            Self::Usd250 => 250,
            Self::Usd500 => 500,
            Self::Usd1000 => 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnnualLimit {
    #[serde(rename = "5000")]
    Usd5k,
    #[default]
    #[serde(rename = "10000")]
    Usd10k,
    #[serde(rename = "unlimited")]
    Unlimited,
}

keyed_enum!(AnnualLimit {
    Usd5k => "5000",
    Usd10k => "10000",
    Unlimited => "unlimited",
});

impl AnnualLimit {
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Usd5k => 0.85,
            Self::Usd10k => 1.0,
            Self::Unlimited => 1.2,
        }
    }

    /// Cap in dollars, `None` for unlimited plans.
    #[must_use]
    pub const fn dollars(self) -> Option<u32> {
        match self {
            Self::Usd5k => Some(5_000),
            Self::Usd10k => Some(10_000),
            Self::Unlimited => None,
        }
    }
}

/// Starter supply bundle bought once when the dog comes home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StarterSupplies {
    #[serde(default)]
    pub crate_kennel: f64,
    #[serde(default)]
    pub bed: f64,
    #[serde(default)]
    pub leash_collar: f64,
    #[serde(default)]
    pub bowls: f64,
    #[serde(default)]
    pub toys: f64,
}

impl StarterSupplies {
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.crate_kennel + self.bed + self.leash_collar + self.bowls + self.toys
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthlyBase {
    #[serde(default)]
    pub treats: f64,
    #[serde(default)]
    pub preventive_meds: f64,
    #[serde(default)]
    pub grooming: f64,
    #[serde(default)]
    pub toys: f64,
    #[serde(default)]
    pub waste_bags: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnnualBase {
    #[serde(default)]
    pub vet_checkup: f64,
    #[serde(default)]
    pub vaccines: f64,
    #[serde(default)]
    pub dental: f64,
    #[serde(default)]
    pub license: f64,
}

/// Base costs for one size row, before the regional multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SizeCosts {
    #[serde(default)]
    pub adoption_fee: f64,
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub spay_neuter: f64,
    #[serde(default)]
    pub first_vet_visit: f64,
    #[serde(default)]
    pub microchip: f64,
    #[serde(default)]
    pub starter_supplies: StarterSupplies,
    #[serde(default)]
    pub training_classes: f64,
    #[serde(default)]
    pub monthly: MonthlyBase,
    #[serde(default)]
    pub annual: AnnualBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostTables {
    #[serde(default)]
    pub small: SizeCosts,
    #[serde(default)]
    pub medium: SizeCosts,
    #[serde(default)]
    pub large: SizeCosts,
    #[serde(default)]
    pub giant: SizeCosts,
}

impl CostTables {
    /// Parse a cost table document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the table shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_COST_TABLES).unwrap_or_else(|err| {
            log::warn!("bundled cost tables failed to parse: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    #[must_use]
    pub const fn for_size(&self, size: SizeCategory) -> &SizeCosts {
        match size {
            SizeCategory::Small => &self.small,
            SizeCategory::Medium => &self.medium,
            SizeCategory::Large => &self.large,
            SizeCategory::Giant => &self.giant,
        }
    }
}
