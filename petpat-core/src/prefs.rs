//! Display preferences resolved before any rendering: language and weight unit.
use serde::{Deserialize, Serialize};

use crate::PreferenceStore;
use crate::units::WeightUnit;

pub const LANG_STORAGE_KEY: &str = "petpat-lang";
pub const WEIGHT_UNIT_STORAGE_KEY: &str = "petpat-weight-unit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

keyed_enum!(Lang {
    En => "en",
    Zh => "zh",
});

impl Lang {
    /// Value for the document's `lang` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// Label shown in the language switcher.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl Preferences {
    /// Read saved preferences; unknown or missing values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns the store's error if it cannot be read.
    pub fn load_from<S: PreferenceStore>(store: &S) -> Result<Self, S::Error> {
        let lang = store
            .load(LANG_STORAGE_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        let weight_unit = store
            .load(WEIGHT_UNIT_STORAGE_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Ok(Self { lang, weight_unit })
    }

    /// Persist both preferences.
    ///
    /// # Errors
    ///
    /// Returns the store's error if a value cannot be written.
    pub fn save_to<S: PreferenceStore>(&self, store: &S) -> Result<(), S::Error> {
        store.save(LANG_STORAGE_KEY, self.lang.as_str())?;
        store.save(WEIGHT_UNIT_STORAGE_KEY, self.weight_unit.as_str())
    }
}
