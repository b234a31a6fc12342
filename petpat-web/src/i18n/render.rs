use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language, falling back to English and then
/// to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key and fill `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Shorthand for a single placeholder.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let args = BTreeMap::from([(name, value)]);
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_replaces_every_placeholder() {
        let value = Value::String("{low}–{high}, from {low}".into());
        let args = BTreeMap::from([("low", "34"), ("high", "46")]);
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "34–46, from 34");
    }

    #[test]
    fn nested_lookup_walks_dotted_keys() {
        let value: Value = serde_json::json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(get_nested_value(&value, "a.b.c"), Some(&Value::from("deep")));
        assert_eq!(get_nested_value(&value, "a.x"), None);
        assert_eq!(render_value(&value, None), None);
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        crate::i18n::set_lang("zh");
        assert_eq!(t("category.food"), "狗粮");
        assert_eq!(t("no.such.key"), "no.such.key");
        crate::i18n::set_lang("en");
        assert_eq!(tr1("calc.lifetime_years", "years", "5"), "5-year total");
    }
}
