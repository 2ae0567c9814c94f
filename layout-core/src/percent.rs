//! Percentage sizing against a parent's dynamic content box
//! (`spec.md` §4.8). Used both in phase 1 (initial percent
//! resolution) and phase 6 (re-resolution after `fitContent` changes
//! the parent's size).

use layout_style::BoxModel;

/// `available = parent.size - paddingNear - paddingFar - borderNear - borderFar`.
pub fn available_main(parent_size: f64, padding_near: f64, padding_far: f64, border_near: f64, border_far: f64) -> f64 {
    (parent_size - padding_near - padding_far - border_near - border_far).max(0.0)
}

pub fn resolve_percent(pct: f64, available: f64) -> f64 {
    available * pct / 100.0
}

/// Resolves a node's `width`/`height` against the parent's content box
/// when either is given as a percentage (either via `percentWidth` /
/// `percentHeight` or a `width`/`height` string ending in `%`), then
/// re-applies the min/max clamp.
pub fn resolve_node_percent_size(
    percent_width: Option<f64>,
    percent_height: Option<f64>,
    parent_width: f64,
    parent_height: f64,
    parent_model: &BoxModel,
    min_width: Option<f64>,
    max_width: Option<f64>,
    min_height: Option<f64>,
    max_height: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    let avail_w = available_main(
        parent_width,
        parent_model.padding.left,
        parent_model.padding.right,
        parent_model.border.left,
        parent_model.border.right,
    );
    let avail_h = available_main(
        parent_height,
        parent_model.padding.top,
        parent_model.padding.bottom,
        parent_model.border.top,
        parent_model.border.bottom,
    );

    let width = percent_width.map(|pct| clamp_opt(resolve_percent(pct, avail_w), min_width, max_width));
    let height = percent_height.map(|pct| clamp_opt(resolve_percent(pct, avail_h), min_height, max_height));

    (width, height)
}

/// `min` wins over `max` when they conflict (spec.md §7, §9 Open Question).
pub fn clamp_opt(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut v = value;
    if let Some(max) = max {
        v = v.min(max);
    }
    if let Some(min) = min {
        v = v.max(min);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_parent_yields_zero() {
        let model = BoxModel::default();
        let (w, _) = resolve_node_percent_size(Some(50.0), None, 0.0, 0.0, &model, None, None, None, None);
        assert_eq!(w, Some(0.0));
    }

    #[test]
    fn min_wins_over_conflicting_max() {
        assert_eq!(clamp_opt(50.0, Some(80.0), Some(60.0)), 80.0);
    }
}
