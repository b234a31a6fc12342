//! Invariants every priced scenario must satisfy.
use petpat_core::{
    CostBreakdown, CostCategory, CostSection, EstimatorSession, OverrideMap, calc_food, estimate,
};
use thiserror::Error;

/// Weights probed by the food monotonicity check, in lbs.
const MONOTONIC_PROBE_LBS: [f64; 6] = [1.0, 5.0, 20.0, 50.0, 100.0, 180.0];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{section} total {total} differs from item sum {sum}")]
    SectionSum {
        section: &'static str,
        total: u64,
        sum: u64,
    },
    #[error("summary {field} is {actual}, expected {expected}")]
    Summary {
        field: &'static str,
        expected: u64,
        actual: u64,
    },
    #[error("{years}-year projection is {actual}, expected {expected}")]
    Lifetime { years: u64, expected: u64, actual: u64 },
    #[error("estimating the same scenario twice gave different results")]
    NotIdempotent,
    #[error("{view} shows {actual:?} for overridden {category}, expected {expected}")]
    OverrideIgnored {
        view: &'static str,
        category: CostCategory,
        expected: u64,
        actual: Option<u64>,
    },
    #[error("computed {category} changed from {before} to {after} under an override")]
    ComputedDrift {
        category: CostCategory,
        before: u64,
        after: u64,
    },
    #[error("enabled view disagrees with toggles for {category}")]
    ToggleMismatch { category: CostCategory },
    #[error("food cost does not grow between {lighter} and {heavier} lbs")]
    FoodNotMonotonic { lighter: String, heavier: String },
    #[error("detail panel for {category} shows {shown}, breakdown has {expected}")]
    DetailMismatch {
        category: CostCategory,
        shown: u64,
        expected: u64,
    },
}

fn section_sum(section: &CostSection) -> u64 {
    section
        .items()
        .iter()
        .fold(0_u64, |acc, item| acc.saturating_add(item.value))
}

fn check_sections(b: &CostBreakdown, out: &mut Vec<InvariantViolation>) {
    let sections = [
        ("one_time", &b.one_time),
        ("monthly", &b.monthly),
        ("monthly_all", &b.monthly_all),
        ("monthly_computed", &b.monthly_computed),
        ("annual_fixed", &b.annual_fixed),
    ];
    for (section, items) in sections {
        let sum = section_sum(items);
        if sum != items.total() {
            out.push(InvariantViolation::SectionSum {
                section,
                total: items.total(),
                sum,
            });
        }
    }
}

fn check_summary(b: &CostBreakdown, out: &mut Vec<InvariantViolation>) {
    let s = b.summary;
    let annual = b
        .monthly
        .total()
        .saturating_mul(12)
        .saturating_add(b.annual_fixed.total());
    let expected = [
        ("monthly", b.monthly.total(), s.monthly),
        ("annual", annual, s.annual),
        ("first_year", s.annual.saturating_add(b.one_time.total()), s.first_year),
    ];
    for (field, expected, actual) in expected {
        if expected != actual {
            out.push(InvariantViolation::Summary {
                field,
                expected,
                actual,
            });
        }
    }
    let horizons = [
        (5, b.lifetime.year5),
        (10, b.lifetime.year10),
        (15, b.lifetime.year15),
    ];
    for (years, actual) in horizons {
        let expected = s
            .first_year
            .saturating_add(s.annual.saturating_mul(years - 1));
        if expected != actual {
            out.push(InvariantViolation::Lifetime {
                years,
                expected,
                actual,
            });
        }
    }
}

fn check_lines(b: &CostBreakdown, out: &mut Vec<InvariantViolation>) {
    for line in &b.lines {
        let in_enabled = b.monthly.get(line.category);
        let consistent = if line.enabled {
            in_enabled == Some(line.value)
        } else {
            in_enabled.is_none()
        };
        if !consistent {
            out.push(InvariantViolation::ToggleMismatch {
                category: line.category,
            });
        }
    }
}

fn check_overrides(session: &EstimatorSession, b: &CostBreakdown, out: &mut Vec<InvariantViolation>) {
    let overrides = session.overrides();
    let baseline = estimate(session.params(), &OverrideMap::new()).breakdown;
    for (category, expected) in overrides.active() {
        if !category.is_monthly() {
            continue;
        }
        let actual = b.monthly_all.get(category);
        if actual != Some(expected) {
            out.push(InvariantViolation::OverrideIgnored {
                view: "monthly_all",
                category,
                expected,
                actual,
            });
        }
        if session.params().is_enabled(category) && b.monthly.get(category) != Some(expected) {
            out.push(InvariantViolation::OverrideIgnored {
                view: "monthly",
                category,
                expected,
                actual: b.monthly.get(category),
            });
        }
        let before = baseline.monthly_computed.get(category).unwrap_or_default();
        let after = b.monthly_computed.get(category).unwrap_or_default();
        if before != after {
            out.push(InvariantViolation::ComputedDrift {
                category,
                before,
                after,
            });
        }
    }
}

fn check_food_monotonic(session: &EstimatorSession, out: &mut Vec<InvariantViolation>) {
    let food = &session.params().food;
    let factor = food.activity.factor();
    let price = food.price.price_per_lb();
    for pair in MONOTONIC_PROBE_LBS.windows(2) {
        let light = calc_food(pair[0], factor, price);
        let heavy = calc_food(pair[1], factor, price);
        if heavy.monthly_cost <= light.monthly_cost {
            out.push(InvariantViolation::FoodNotMonotonic {
                lighter: pair[0].to_string(),
                heavier: pair[1].to_string(),
            });
        }
    }
}

fn check_detail(session: &EstimatorSession, b: &CostBreakdown, out: &mut Vec<InvariantViolation>) {
    let Some(panel) = session.detail_panel() else {
        return;
    };
    let expected = b.monthly_all.get(panel.category).unwrap_or_default();
    if panel.value != expected {
        out.push(InvariantViolation::DetailMismatch {
            category: panel.category,
            shown: panel.value,
            expected,
        });
    }
}

/// Number of invariant families evaluated by [`check_session`].
pub const CHECK_FAMILIES: usize = 7;

/// Run every invariant against the session's current estimate.
pub fn check_session(session: &EstimatorSession) -> Vec<InvariantViolation> {
    let mut out = Vec::new();
    let first = session.estimate();
    if first != session.estimate() {
        out.push(InvariantViolation::NotIdempotent);
    }
    let b = &first.breakdown;
    check_sections(b, &mut out);
    check_summary(b, &mut out);
    check_lines(b, &mut out);
    check_overrides(session, b, &mut out);
    check_food_monotonic(session, &mut out);
    check_detail(session, b, &mut out);
    out
}
