//! Breed reference catalog.
//!
//! Weights are stored in lbs. The catalog is read-only: the estimator only
//! derives a default size and body weight from a breed and checks whether the
//! breed carries an insurance surcharge.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{GIANT_MIN_AVG_LBS, LARGE_MIN_AVG_LBS, MEDIUM_MIN_AVG_LBS};
use crate::tables::SizeCategory;

const DEFAULT_BREEDS_DATA: &str = include_str!("../../petpat-web/static/assets/data/breeds.json");

/// Breeds with elevated insurance claim rates, matched by exact English name.
pub const HIGH_RISK_BREEDS: &[&str] = &[
    "French Bulldog",
    "English Bulldog",
    "Pug",
    "Great Dane",
    "Bernese Mountain Dog",
    "Rottweiler",
    "Cavalier King Charles Spaniel",
    "German Shepherd",
    "Boxer",
    "Doberman Pinscher",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("breed catalog is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("breed `{name}` has an invalid weight range")]
    InvalidRange { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub name_en: String,
    #[serde(default)]
    pub name_zh: String,
    pub weight_min: f64,
    pub weight_max: f64,
}

impl Breed {
    /// Midpoint of the breed's weight range in lbs.
    #[must_use]
    pub fn average_weight(&self) -> f64 {
        (self.weight_min + self.weight_max) / 2.0
    }

    /// Rounded midpoint, used as the default body weight.
    #[must_use]
    pub fn default_weight_lbs(&self) -> f64 {
        self.average_weight().round()
    }

    #[must_use]
    pub fn size(&self) -> SizeCategory {
        size_for_average_weight(self.average_weight())
    }

    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        is_high_risk_breed(&self.name_en)
    }

    /// Name in the requested language, falling back to English.
    #[must_use]
    pub fn display_name(&self, lang: &str) -> &str {
        if lang == "zh" && !self.name_zh.is_empty() {
            &self.name_zh
        } else {
            &self.name_en
        }
    }

    fn matches(&self, needle_lower: &str, raw: &str) -> bool {
        self.name_en.to_lowercase().contains(needle_lower) || self.name_zh.contains(raw)
    }
}

/// Classify an average weight (lbs); each threshold belongs to the larger size.
#[must_use]
pub fn size_for_average_weight(avg_lbs: f64) -> SizeCategory {
    if avg_lbs >= GIANT_MIN_AVG_LBS {
        SizeCategory::Giant
    } else if avg_lbs >= LARGE_MIN_AVG_LBS {
        SizeCategory::Large
    } else if avg_lbs >= MEDIUM_MIN_AVG_LBS {
        SizeCategory::Medium
    } else {
        SizeCategory::Small
    }
}

#[must_use]
pub fn is_high_risk_breed(name_en: &str) -> bool {
    HIGH_RISK_BREEDS.contains(&name_en)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BreedCatalog {
    #[serde(default)]
    breeds: Vec<Breed>,
}

impl BreedCatalog {
    /// Parse and validate a breed catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a weight range is inverted
    /// or non-positive.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        if let Some(bad) = catalog.breeds.iter().find(|b| {
            !(b.weight_min.is_finite() && b.weight_max.is_finite())
                || b.weight_min <= 0.0
                || b.weight_min > b.weight_max
        }) {
            return Err(CatalogError::InvalidRange {
                name: bad.name_en.clone(),
            });
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_BREEDS_DATA).unwrap_or_else(|err| {
            log::warn!("bundled breed catalog rejected: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    #[must_use]
    pub fn find(&self, name_en: &str) -> Option<&Breed> {
        self.breeds.iter().find(|b| b.name_en == name_en)
    }

    /// Filter by English name (case-insensitive) or Chinese name substring.
    ///
    /// A blank query returns every breed in catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Breed> {
        let raw = query.trim();
        if raw.is_empty() {
            return self.breeds.iter().collect();
        }
        let needle = raw.to_lowercase();
        self.breeds
            .iter()
            .filter(|b| b.matches(&needle, raw))
            .collect()
    }
}
