#[cfg(target_arch = "wasm32")]
use petpat_web::dom;
use petpat_core::{FeedbackForm, Lang};
use petpat_web::api::{self, FetchError};
use petpat_web::i18n;
use petpat_web::paths;
use petpat_web::router::Route;
use std::collections::BTreeMap;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");

    let mut vars = BTreeMap::new();
    vars.insert("low", "34");
    vars.insert("high", "46");
    let range = i18n::tr("detail.insurance.range", Some(&vars));
    assert_eq!(range, "Typical quotes: $34–$46 per month");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    assert_eq!(i18n::fmt_usd(1_234_567), "$1,234,567");
    assert_eq!(i18n::fmt_decimal(f64::NAN, 2), "0");

    i18n::set_lang("zh");
    assert_eq!(i18n::current(), Lang::Zh);
    assert_eq!(i18n::t("calc.summary.monthly"), "每月");
    i18n::set_lang("fr");
    assert_eq!(i18n::current(), Lang::Zh);
    i18n::set_lang("en");
}

#[test]
fn every_locale_has_metadata_and_a_bundle() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "en"));
    assert!(metas.iter().any(|m| m.code == "zh" && m.name == "中文"));
}

#[test]
fn routes_resolve_to_their_pages() {
    assert_eq!(Route::recognize("/calculator"), Some(Route::Calculator));
    assert_eq!(Route::recognize("/method"), Some(Route::Method));
    assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    assert_eq!(Route::Home.href(), paths::asset_path("/"));
}

#[test]
fn feedback_body_is_the_trimmed_submission() {
    let form = FeedbackForm {
        name: " Ann ".into(),
        email: "ann@example.com".into(),
        summary: "Food looks high".into(),
        message: "My lab eats less.".into(),
    };
    let submission = form.validate().unwrap();
    let body = api::feedback_body(&submission).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["name"], "Ann");
    assert_eq!(value["summary"], "Food looks high");
    assert_eq!(api::FEEDBACK_ENDPOINT, "/api/feedback");
}

#[test]
fn fetch_errors_name_the_url() {
    let err = FetchError::Status {
        url: "/api/feedback".into(),
        status: 502,
    };
    let msg = err.to_string();
    assert!(msg.contains("/api/feedback"));
    assert!(msg.contains("502"));
}
