use crate::i18n::locales::load_translations;
use petpat_core::Lang;
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: Lang,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: Lang) -> Option<I18nBundle> {
    let fallback = load_translations(Lang::En)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang,
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(Lang::En).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: Lang::En,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> Lang {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::prefs::load_preferences().lang
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Lang::En
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(initial).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Switch the active language.
///
/// Accepts a language code (`en`, `zh`); unknown codes are ignored. In the
/// browser this also updates `<html lang>` and persists the choice.
pub fn set_lang(code: &str) {
    let Ok(lang) = code.parse::<Lang>() else {
        log::warn!("ignoring unknown language code {code:?}");
        return;
    };
    if let Some(bundle) = build_bundle(lang) {
        replace_bundle(bundle);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
                let _ = el.set_attribute("lang", lang.html_lang());
            }
            crate::prefs::save_lang(lang);
        }
    }
}

/// Code of the active language.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.to_string())
}

#[must_use]
pub fn current() -> Lang {
    with_bundle(|bundle| bundle.lang)
}
