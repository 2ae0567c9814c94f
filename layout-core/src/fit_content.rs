//! Container-hugs-children intrinsic sizing (`spec.md` §4.7).

use layout_style::{BoxModel, Display};

pub struct FitChild {
    pub outer_width: f64,
    pub outer_height: f64,
}

/// Returns the new `(width, height)` for a `fitContent` container.
pub fn fit_content_size(display: Display, model: &BoxModel, children: &[FitChild], columns: u32) -> (f64, f64) {
    let pad_h = model.padding.horizontal() + model.border.horizontal();
    let pad_v = model.padding.vertical() + model.border.vertical();

    match display {
        Display::Vertical => {
            let gap_total = 0.0; // gap applied by caller, which knows the container's gap value
            let height = pad_v + children.iter().map(|c| c.outer_height).sum::<f64>() + gap_total;
            let width = pad_h + children.iter().map(|c| c.outer_width).fold(0.0_f64, f64::max);
            (width, height)
        }
        Display::Horizontal => {
            let width = pad_h + children.iter().map(|c| c.outer_width).sum::<f64>();
            let height = pad_v + children.iter().map(|c| c.outer_height).fold(0.0_f64, f64::max);
            (width, height)
        }
        Display::Grid => {
            let columns = columns.max(1);
            let max_w = children.iter().map(|c| c.outer_width).fold(0.0_f64, f64::max);
            let max_h = children.iter().map(|c| c.outer_height).fold(0.0_f64, f64::max);
            let rows = (children.len() as u32 + columns - 1) / columns;
            (pad_h + columns as f64 * max_w, pad_v + rows.max(1) as f64 * max_h)
        }
    }
}

/// Same as `fit_content_size` but including the between-item gap,
/// which the tree driver supplies separately since it already knows
/// the container's `gap` and grid row count.
pub fn fit_content_size_with_gap(
    display: Display,
    model: &BoxModel,
    children: &[FitChild],
    columns: u32,
    gap: f64,
) -> (f64, f64) {
    let (mut width, mut height) = fit_content_size(display, model, children, columns);
    let n = children.len();
    match display {
        Display::Vertical => {
            height += gap * n.saturating_sub(1) as f64;
        }
        Display::Horizontal => {
            width += gap * n.saturating_sub(1) as f64;
        }
        Display::Grid => {
            let columns = columns.max(1);
            let rows = ((n as u32 + columns - 1) / columns).max(if n > 0 { 1 } else { 0 });
            width += gap * columns.saturating_sub(1) as f64;
            height += gap * rows.saturating_sub(1) as f64;
        }
    }
    (width, height)
}
