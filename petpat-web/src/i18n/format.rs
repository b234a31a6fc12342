/// Group an integer with thousands separators, `1045` becomes `1,045`.
#[must_use]
pub fn fmt_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with a leading `$`.
#[must_use]
pub fn fmt_usd(value: u64) -> String {
    format!("${}", fmt_grouped(value))
}

/// Fixed-point number for measurements shown in the detail panel.
#[must_use]
pub fn fmt_decimal(value: f64, places: usize) -> String {
    if value.is_finite() {
        format!("{value:.places$}")
    } else {
        "0".to_string()
    }
}

/// Current calendar year, used by the footer copyright line.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(2025)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        2025
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_inserts_separators() {
        assert_eq!(fmt_grouped(0), "0");
        assert_eq!(fmt_grouped(999), "999");
        assert_eq!(fmt_grouped(1_045), "1,045");
        assert_eq!(fmt_grouped(1_234_567), "1,234,567");
        assert_eq!(fmt_usd(42_860), "$42,860");
    }

    #[test]
    fn decimals_ignore_non_finite_values() {
        assert_eq!(fmt_decimal(15.876, 1), "15.9");
        assert_eq!(fmt_decimal(f64::NAN, 2), "0");
    }
}
