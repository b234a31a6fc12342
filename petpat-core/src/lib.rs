//! PetPat Cost Engine
//!
//! Platform-agnostic estimation logic for the PetPat dog ownership calculator.
//! This crate prices a scenario, applies manual overrides, and tracks the
//! drill-down state without any UI or browser dependencies.

#[macro_use]
mod keyed;

pub mod breakdown;
pub mod breeds;
pub mod chart;
pub mod constants;
pub mod detail;
pub mod feedback;
pub mod food;
pub mod images;
pub mod insurance;
pub mod numbers;
pub mod overrides;
pub mod prefs;
pub mod scenario;
pub mod session;
pub mod tables;
pub mod units;

// Re-export commonly used types
pub use breakdown::{
    CostBreakdown, CostCategory, CostItem, CostKind, CostSection, CostSummary, Estimate,
    LifetimeProjection, MonthlyLine, compute_breakdown, compute_breakdown_with, estimate,
    project_years,
};
pub use breeds::{Breed, BreedCatalog, CatalogError, HIGH_RISK_BREEDS, size_for_average_weight};
pub use chart::{DonutLayout, PieSlice, category_color, pie_slices, truncate_label};
pub use detail::{DetailBody, DetailPanel, DetailView, FoodDetail, InsuranceDetail};
pub use feedback::{
    FeedbackError, FeedbackForm, FeedbackStatus, FeedbackSubmission, summary_units,
    truncate_summary,
};
pub use food::{FoodCalc, FoodPrice, calc_food};
pub use images::{ImageList, ImageNameError, filter_image_names, image_url, validate_image_name};
pub use insurance::{InsurancePlan, InsuranceQuote, PremiumFactors, calc_insurance_premium, quote_plan};
pub use overrides::OverrideMap;
pub use prefs::{Lang, Preferences};
pub use scenario::{FoodParams, InsuranceParams, ScenarioParameters};
pub use session::{EstimatorSession, SessionAction};
pub use tables::{
    AcquisitionMethod, ActivityLevel, AnnualLimit, CostLevel, CostTables, Deductible, FoodTier,
    Reimbursement, SizeCategory, parse_or_default,
};
pub use units::WeightUnit;

#[cfg(debug_assertions)]
pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(constants::DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_log_enabled() -> bool {
    false
}

/// Trait for abstracting persisted UI preferences.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a stored value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl PreferenceStore for MemoryStore {
        type Error = Infallible;

        fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn preferences_roundtrip_through_store() {
        let store = MemoryStore::default();
        assert_eq!(Preferences::load_from(&store).unwrap(), Preferences::default());

        let prefs = Preferences {
            lang: Lang::Zh,
            weight_unit: WeightUnit::Kg,
        };
        prefs.save_to(&store).unwrap();
        assert_eq!(Preferences::load_from(&store).unwrap(), prefs);
        assert_eq!(
            store.values.borrow().get(prefs::LANG_STORAGE_KEY).map(String::as_str),
            Some("zh")
        );
    }

    #[test]
    fn unknown_stored_values_fall_back() {
        let store = MemoryStore::default();
        store.save(prefs::LANG_STORAGE_KEY, "fr").unwrap();
        store.save(prefs::WEIGHT_UNIT_STORAGE_KEY, "stone").unwrap();
        assert_eq!(Preferences::load_from(&store).unwrap(), Preferences::default());
        assert_eq!(Lang::Zh.html_lang(), "zh-CN");
    }

    #[test]
    fn session_estimate_matches_free_function() {
        let session = EstimatorSession::new();
        let direct = estimate(&ScenarioParameters::default(), &OverrideMap::new());
        assert_eq!(session.estimate(), direct);
    }
}
