use petpat_core::Lang;
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub lang: Lang,
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        lang: Lang::En,
        code: "en",
        name: "EN",
    },
    LocaleMeta {
        lang: Lang::Zh,
        code: "zh",
        name: "中文",
    },
];

const LOCALE_TABLE: &[(Lang, &str)] = &[
    (Lang::En, include_str!("../../i18n/en.json")),
    (Lang::Zh, include_str!("../../i18n/zh.json")),
];

/// Supported locales with the label shown in the navbar switch.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn load_translations(lang: Lang) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
