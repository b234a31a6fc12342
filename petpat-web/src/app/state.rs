use petpat_core::{Lang, WeightUnit};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub lang: UseStateHandle<Lang>,
    pub weight_unit: UseStateHandle<WeightUnit>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        lang: use_state(crate::i18n::current),
        weight_unit: use_state(|| crate::prefs::load_preferences().weight_unit),
    }
}

impl AppState {
    /// Switch language, persist it and re-render with the new bundle.
    #[must_use]
    pub fn lang_change(&self) -> Callback<Lang> {
        let lang = self.lang.clone();
        Callback::from(move |next: Lang| {
            crate::i18n::set_lang(next.as_str());
            lang.set(next);
        })
    }

    #[must_use]
    pub fn unit_change(&self) -> Callback<WeightUnit> {
        let unit = self.weight_unit.clone();
        Callback::from(move |next: WeightUnit| {
            crate::prefs::save_weight_unit(next);
            unit.set(next);
        })
    }
}
