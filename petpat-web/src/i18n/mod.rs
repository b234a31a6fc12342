mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current, current_lang, set_lang};
pub use format::{current_year, fmt_decimal, fmt_grouped, fmt_usd};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr, tr1};
