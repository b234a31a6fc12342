//! Display units for body weight. The estimator itself always works in lbs.
use serde::{Deserialize, Serialize};

use crate::constants::LBS_TO_KG;
use crate::numbers::parse_finite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

keyed_enum!(WeightUnit {
    Lbs => "lbs",
    Kg => "kg",
});

impl WeightUnit {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        self.as_str()
    }

    /// Convert a weight in lbs into this unit.
    #[must_use]
    pub fn from_lbs(self, lbs: f64) -> f64 {
        match self {
            Self::Lbs => lbs,
            Self::Kg => lbs * LBS_TO_KG,
        }
    }

    /// Convert a weight in this unit back to lbs.
    #[must_use]
    pub fn to_lbs(self, value: f64) -> f64 {
        match self {
            Self::Lbs => value,
            Self::Kg => value / LBS_TO_KG,
        }
    }

    /// Parse user text in this unit into lbs.
    #[must_use]
    pub fn parse_to_lbs(self, text: &str) -> Option<f64> {
        parse_finite(text).map(|value| self.to_lbs(value))
    }

    /// Format a weight held in lbs for display, one decimal for kg.
    #[must_use]
    pub fn format(self, lbs: f64) -> String {
        match self {
            Self::Lbs => format!("{} {}", lbs.round(), self.suffix()),
            Self::Kg => format!("{:.1} {}", self.from_lbs(lbs), self.suffix()),
        }
    }

    /// Format a breed weight range held in lbs.
    #[must_use]
    pub fn format_range(self, min_lbs: f64, max_lbs: f64) -> String {
        match self {
            Self::Lbs => format!("{}–{} {}", min_lbs.round(), max_lbs.round(), self.suffix()),
            Self::Kg => format!(
                "{:.1}–{:.1} {}",
                self.from_lbs(min_lbs),
                self.from_lbs(max_lbs),
                self.suffix()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        assert!((WeightUnit::Kg.from_lbs(10.0) - 4.535_92).abs() < 1e-9);
        assert!((WeightUnit::Kg.to_lbs(4.535_92) - 10.0).abs() < 1e-9);
        assert!((WeightUnit::Lbs.to_lbs(12.0) - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_user_text() {
        let lbs = WeightUnit::Kg.parse_to_lbs(" 20 ").unwrap();
        assert!((lbs - 20.0 / 0.453_592).abs() < 1e-9);
        assert_eq!(WeightUnit::Lbs.parse_to_lbs("heavy"), None);
    }

    #[test]
    fn formats_for_display() {
        assert_eq!(WeightUnit::Lbs.format(35.0), "35 lbs");
        assert_eq!(WeightUnit::Kg.format(35.0), "15.9 kg");
        assert_eq!(WeightUnit::Lbs.format_range(55.0, 80.0), "55–80 lbs");
        assert_eq!(WeightUnit::Kg.format_range(55.0, 80.0), "24.9–36.3 kg");
        assert_eq!("kg".parse::<WeightUnit>(), Ok(WeightUnit::Kg));
    }
}
