//! Small geometry helpers shared by the flow layouters and the
//! out-of-flow positioners. Grounded in `azul-layout::new::geometry::Rect`,
//! simplified: this engine always has concrete, already-resolved
//! sizes by the time these helpers run (no `Number::Undefined`).

use layout_style::BoxModel;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The border-box outer rectangle of a node, in world coordinates.
pub fn outer_rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect { x, y, width, height }
}

/// The content rectangle (inside padding + border) of a border-box
/// sized node at world position `(x, y)`.
pub fn content_rect(x: f64, y: f64, width: f64, height: f64, model: &BoxModel) -> Rect {
    let left = model.padding.left + model.border.left;
    let top = model.padding.top + model.border.top;
    let horizontal = model.padding.horizontal() + model.border.horizontal();
    let vertical = model.padding.vertical() + model.border.vertical();
    Rect {
        x: x + left,
        y: y + top,
        width: (width - horizontal).max(0.0),
        height: (height - vertical).max(0.0),
    }
}

pub fn outer_width(width: f64, model: &BoxModel) -> f64 {
    width + model.margin.horizontal()
}

pub fn outer_height(height: f64, model: &BoxModel) -> f64 {
    height + model.margin.vertical()
}
