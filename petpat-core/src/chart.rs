//! Donut chart geometry for the monthly breakdown.
use serde::{Deserialize, Serialize};

use crate::breakdown::{CostCategory, CostItem};
use crate::constants::{
    CHART_GAP_DEG, CHART_INNER_RATIO, CHART_LABEL_KEEP_CHARS, CHART_LABEL_MAX_CHARS,
    CHART_MIN_SPAN_DEG, CHART_OUTER_INSET, CHART_START_DEG,
};
use crate::numbers::{currency_to_f64, usize_to_f64};

const FALLBACK_COLOR: &str = "#64748b";

/// Slice colour for a category.
#[must_use]
pub const fn category_color(category: CostCategory) -> &'static str {
    match category {
        CostCategory::Food => "#0d9488",
        CostCategory::PreventiveMeds => "#06b6d4",
        CostCategory::Treats => "#0ea5e9",
        CostCategory::Grooming => "#6366f1",
        CostCategory::ToysSupplies => "#6d28d9",
        _ => FALLBACK_COLOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Point on a circle; 0° is twelve o'clock, angles grow clockwise.
#[must_use]
pub fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> Point {
    let rad = (deg + CHART_START_DEG).to_radians();
    Point {
        x: cx + r * rad.cos(),
        y: cy + r * rad.sin(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub size: f64,
    pub cx: f64,
    pub cy: f64,
    pub r_outer: f64,
    pub r_inner: f64,
}

impl DonutLayout {
    #[must_use]
    pub fn new(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            size,
            cx: half,
            cy: half,
            r_outer: half - CHART_OUTER_INSET,
            r_inner: half * CHART_INNER_RATIO,
        }
    }

    /// SVG path for a ring segment between two angles.
    #[must_use]
    pub fn arc_path(&self, start_deg: f64, end_deg: f64) -> String {
        let start = polar(self.cx, self.cy, self.r_outer, start_deg);
        let end = polar(self.cx, self.cy, self.r_outer, end_deg);
        let start_inner = polar(self.cx, self.cy, self.r_inner, start_deg);
        let end_inner = polar(self.cx, self.cy, self.r_inner, end_deg);
        let large = u8::from(end_deg - start_deg > 180.0);
        format!(
            "M {} {} A {ro} {ro} 0 {large} 1 {} {} L {} {} A {ri} {ri} 0 {large} 0 {} {} Z",
            start.x,
            start.y,
            end.x,
            end.y,
            end_inner.x,
            end_inner.y,
            start_inner.x,
            start_inner.y,
            ro = self.r_outer,
            ri = self.r_inner,
        )
    }

    /// Centre of a slice's label, midway through the ring.
    #[must_use]
    pub fn label_point(&self, slice: &PieSlice) -> Point {
        polar(
            self.cx,
            self.cy,
            (self.r_inner + self.r_outer) / 2.0,
            slice.mid_deg(),
        )
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        (self.size / 18.0).clamp(9.0, 12.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice {
    pub category: CostCategory,
    pub value: u64,
    pub pct: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub color: &'static str,
}

impl PieSlice {
    #[must_use]
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Lay out slices clockwise with a fixed gap; every slice keeps a minimum span
/// so zero-valued categories stay clickable.
#[must_use]
pub fn pie_slices(items: &[CostItem], total: u64) -> Vec<PieSlice> {
    let gaps = usize_to_f64(items.len().saturating_sub(1)) * CHART_GAP_DEG;
    let total = currency_to_f64(total);
    let mut acc = 0.0;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let pct = if total > 0.0 {
                currency_to_f64(item.value) / total
            } else {
                0.0
            };
            let span = (pct * (360.0 - gaps)).max(CHART_MIN_SPAN_DEG);
            let start_deg = if i > 0 { acc + CHART_GAP_DEG } else { acc };
            acc = start_deg + span;
            PieSlice {
                category: item.category,
                value: item.value,
                pct,
                start_deg,
                end_deg: acc,
                color: category_color(item.category),
            }
        })
        .collect()
}

/// Shorten long slice labels so they fit inside the ring.
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > CHART_LABEL_MAX_CHARS {
        let head: String = label.chars().take(CHART_LABEL_KEEP_CHARS).collect();
        format!("{head}…")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: CostCategory, value: u64) -> CostItem {
        CostItem { category, value }
    }

    #[test]
    fn slices_fill_the_ring_with_gaps() {
        let items = [
            item(CostCategory::Food, 50),
            item(CostCategory::Grooming, 30),
            item(CostCategory::Treats, 20),
        ];
        let slices = pie_slices(&items, 100);
        assert_eq!(slices.len(), 3);
        assert!((slices[0].start_deg).abs() < f64::EPSILON);
        assert!((slices[1].start_deg - (slices[0].end_deg + 1.5)).abs() < 1e-9);
        assert!((slices[2].end_deg - 360.0).abs() < 1e-9);
        assert_eq!(slices[0].color, "#0d9488");
    }

    #[test]
    fn tiny_and_zero_slices_keep_minimum_span() {
        let items = [item(CostCategory::Food, 100), item(CostCategory::Insurance, 0)];
        let slices = pie_slices(&items, 100);
        assert!((slices[1].end_deg - slices[1].start_deg - 2.0).abs() < 1e-9);
        let empty = pie_slices(&items, 0);
        assert!(empty.iter().all(|s| s.pct.abs() < f64::EPSILON));
    }

    #[test]
    fn layout_matches_ring_proportions() {
        let layout = DonutLayout::new(360.0);
        assert!((layout.r_outer - 178.0).abs() < f64::EPSILON);
        assert!((layout.r_inner - 99.0).abs() < 1e-9);
        assert!((layout.font_size() - 12.0).abs() < f64::EPSILON);
        assert!((DonutLayout::new(120.0).font_size() - 9.0).abs() < f64::EPSILON);
        let top = polar(10.0, 10.0, 5.0, 0.0);
        assert!((top.x - 10.0).abs() < 1e-9 && (top.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn arc_path_flags_large_arcs() {
        let layout = DonutLayout::new(100.0);
        assert!(layout.arc_path(0.0, 200.0).contains(" 0 1 1 "));
        assert!(layout.arc_path(0.0, 90.0).contains(" 0 0 1 "));
        assert!(layout.arc_path(0.0, 90.0).ends_with('Z'));
    }

    #[test]
    fn long_labels_are_shortened() {
        assert_eq!(truncate_label("Toys & Supplies"), "Toys & Suppl…");
        assert_eq!(truncate_label("Preventive Meds"), "Preventive M…");
        assert_eq!(truncate_label("Food"), "Food");
        assert_eq!(truncate_label("Insurance plan"), "Insurance plan");
    }
}
