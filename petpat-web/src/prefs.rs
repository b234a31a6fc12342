//! `localStorage` backing for the saved language and weight unit.
use petpat_core::prefs::{LANG_STORAGE_KEY, WEIGHT_UNIT_STORAGE_KEY};
use petpat_core::{Lang, PreferenceStore, Preferences, WeightUnit};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected {key}: {message}")]
    Rejected { key: String, message: String },
}

/// Browser preference store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorePrefs;

impl PreferenceStore for LocalStorePrefs {
    type Error = StorageError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = crate::dom::local_storage()
            .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))?;
        storage.get_item(key).map_err(|err| StorageError::Rejected {
            key: key.to_string(),
            message: crate::dom::js_error_message(&err),
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = crate::dom::local_storage()
            .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                message: crate::dom::js_error_message(&err),
            })
    }
}

fn save_key<S: PreferenceStore>(store: &S, key: &str, value: &str) {
    if let Err(err) = store.save(key, value) {
        log::warn!("could not persist {key}: {err}");
    }
}

/// Saved preferences, or defaults when nothing usable is stored.
#[must_use]
pub fn load_preferences_from<S: PreferenceStore>(store: &S) -> Preferences {
    Preferences::load_from(store).unwrap_or_else(|err| {
        log::warn!("falling back to default preferences: {err}");
        Preferences::default()
    })
}

pub fn save_lang_to<S: PreferenceStore>(store: &S, lang: Lang) {
    save_key(store, LANG_STORAGE_KEY, lang.as_str());
}

pub fn save_weight_unit_to<S: PreferenceStore>(store: &S, unit: WeightUnit) {
    save_key(store, WEIGHT_UNIT_STORAGE_KEY, unit.as_str());
}

#[must_use]
pub fn load_preferences() -> Preferences {
    #[cfg(target_arch = "wasm32")]
    {
        load_preferences_from(&LocalStorePrefs)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Preferences::default()
    }
}

pub fn save_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        save_lang_to(&LocalStorePrefs, lang);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
    }
}

pub fn save_weight_unit(unit: WeightUnit) {
    #[cfg(target_arch = "wasm32")]
    {
        save_weight_unit_to(&LocalStorePrefs, unit);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = unit;
    }
}
