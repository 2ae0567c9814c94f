//! Absolute positioning within the parent's content rectangle
//! (`spec.md` §4.9).
//!
//! The worked example in `spec.md` §8/§9 ("Absolute corner") resolves
//! `right`/`bottom` against the parent's box with only *border*
//! subtracted, not padding — the containing rectangle for an
//! absolutely-positioned child is the padding box, matching standard
//! CSS containing-block semantics (an absolutely positioned
//! descendant's containing block is the nearest positioned ancestor's
//! padding box). This is distinct from the content box flow children
//! are placed in (`crate::geometry::content_rect`, which subtracts
//! padding *and* border).

use layout_style::BoxModel;

/// Computes `(x, y)` for an absolutely-positioned child, or `None` if
/// the parent is missing (the positioner is then a no-op).
#[allow(clippy::too_many_arguments)]
pub fn resolve_absolute_position(
    parent: Option<(f64, f64, f64, f64, &BoxModel)>,
    child_width: f64,
    child_height: f64,
    margin_left: f64,
    margin_right: f64,
    margin_top: f64,
    margin_bottom: f64,
    top: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    left: Option<f64>,
) -> Option<(f64, f64)> {
    let (px, py, pw, ph, model) = parent?;
    // Padding box: border subtracted, padding included.
    let content_left = px + model.border.left;
    let content_top = py + model.border.top;
    let content_right = px + pw - model.border.right;
    let content_bottom = py + ph - model.border.bottom;

    let x = if let Some(left) = left {
        content_left + left + margin_left
    } else if let Some(right) = right {
        content_right - right - child_width - margin_right
    } else {
        content_left + margin_left
    };

    let y = if let Some(top) = top {
        content_top + top + margin_top
    } else if let Some(bottom) = bottom {
        content_bottom - bottom - child_height - margin_bottom
    } else {
        content_top + margin_top
    };

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_right_corner() {
        let model = BoxModel {
            padding: layout_style::Edges { top: 15.0, right: 15.0, bottom: 15.0, left: 15.0 },
            border: layout_style::Edges { top: 2.0, right: 2.0, bottom: 2.0, left: 2.0 },
            margin: Default::default(),
        };
        let pos = resolve_absolute_position(
            Some((0.0, 0.0, 500.0, 400.0, &model)),
            50.0,
            50.0,
            0.0,
            0.0,
            0.0,
            0.0,
            None,
            Some(10.0),
            Some(10.0),
            None,
        )
        .unwrap();
        assert_eq!(pos, (438.0, 338.0));
    }

    #[test]
    fn missing_parent_is_noop() {
        assert_eq!(
            resolve_absolute_position(None, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0, None, None, None, None),
            None
        );
    }
}
