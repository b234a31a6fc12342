//! Centralized formula constants and rating factors for the PetPat estimator.
//!
//! These values define the deterministic math behind every estimate. Keeping
//! them together means tuning happens through reviewed code changes rather
//! than through the bundled JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "PETPAT_DEBUG_LOGS";
pub(crate) const LOG_BREAKDOWN_COMPUTED: &str = "log.breakdown.computed";
pub(crate) const LOG_OVERRIDE_APPLIED: &str = "log.override.applied";
pub(crate) const LOG_OVERRIDE_IGNORED: &str = "log.override.ignored";
pub(crate) const LOG_DETAIL_TRANSITION: &str = "log.detail.transition";
pub(crate) const LOG_SCENARIO_RESET: &str = "log.scenario.reset";
pub(crate) const LOG_INPUT_IGNORED: &str = "log.input.ignored";

// Units --------------------------------------------------------------------
pub const LBS_TO_KG: f64 = 0.453_592;

// Food metabolism ----------------------------------------------------------
pub(crate) const RER_COEFFICIENT: f64 = 70.0;
pub(crate) const RER_EXPONENT: f64 = 0.75;
pub(crate) const KCAL_PER_KG_FOOD: f64 = 3600.0;
pub(crate) const DAYS_PER_MONTH: f64 = 30.44;
pub(crate) const MIN_WEIGHT_LBS: f64 = 1.0;
pub(crate) const MIN_CUSTOM_PRICE_PER_LB: f64 = 0.01;

// Insurance rating ---------------------------------------------------------
pub(crate) const INSURANCE_BASE_PREMIUM: f64 = 40.0;
pub(crate) const INSURANCE_BAND_LOW: f64 = 0.85;
pub(crate) const INSURANCE_BAND_HIGH: f64 = 1.15;
pub(crate) const HIGH_RISK_SURCHARGE: f64 = 1.25;
pub(crate) const AGE_BANDS: [(u8, f64); 4] = [(1, 0.8), (5, 1.0), (8, 1.4), (11, 1.9)];
pub(crate) const AGE_FACTOR_SENIOR: f64 = 2.5;
pub const INSURANCE_AGE_MAX: u8 = 20;
pub const DEFAULT_DOG_AGE: u8 = 2;

// Breed size thresholds (average of the weight range, lbs) ------------------
pub(crate) const GIANT_MIN_AVG_LBS: f64 = 100.0;
pub(crate) const LARGE_MIN_AVG_LBS: f64 = 50.0;
pub(crate) const MEDIUM_MIN_AVG_LBS: f64 = 20.0;

// Aggregation --------------------------------------------------------------
pub(crate) const MONTHS_PER_YEAR: u64 = 12;
pub const LIFETIME_YEARS: [u64; 3] = [5, 10, 15];
pub(crate) const MAX_CURRENCY: f64 = 1.0e12;

// Feedback -----------------------------------------------------------------
pub const SUMMARY_MAX_UNITS: usize = 100;
pub(crate) const SUBJECT_SUMMARY_MAX_CHARS: usize = 50;
pub(crate) const SUBJECT_PREFIX: &str = "[PetPat] ";

// Chart geometry -----------------------------------------------------------
pub(crate) const CHART_GAP_DEG: f64 = 1.5;
pub(crate) const CHART_MIN_SPAN_DEG: f64 = 2.0;
pub(crate) const CHART_START_DEG: f64 = -90.0;
pub(crate) const CHART_INNER_RATIO: f64 = 0.55;
pub(crate) const CHART_OUTER_INSET: f64 = 2.0;
pub(crate) const CHART_LABEL_MAX_CHARS: usize = 14;
pub(crate) const CHART_LABEL_KEEP_CHARS: usize = 12;
