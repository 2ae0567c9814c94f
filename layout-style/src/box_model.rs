//! Per-side margin/padding/border resolution, grounded in
//! `azul-core::ui_solver::ResolvedOffsets` / `azul-layout::new::geometry::Offsets<T>`:
//! a four-field struct with `horizontal`/`vertical` convenience sums.

use crate::style::ParsedStyle;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl Edges<f64> {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoxModel {
    pub margin: Edges<f64>,
    pub padding: Edges<f64>,
    pub border: Edges<f64>,
}

fn resolve_side(
    style: &ParsedStyle,
    specific: &str,
    shorthand: &str,
) -> f64 {
    style
        .get_f64(specific)
        .or_else(|| style.get_f64(shorthand))
        .unwrap_or(0.0)
}

fn resolve_border_side(style: &ParsedStyle, side_width_key: &str) -> f64 {
    style
        .get_f64(side_width_key)
        .or_else(|| style.get_f64("borderWidth"))
        .or_else(|| style.get_f64("border"))
        .unwrap_or(0.0)
}

/// Derives the 3x4 margin/padding/border table from a computed style.
pub fn resolve_box_model(style: &ParsedStyle) -> BoxModel {
    BoxModel {
        margin: Edges {
            top: resolve_side(style, "marginTop", "margin"),
            right: resolve_side(style, "marginRight", "margin"),
            bottom: resolve_side(style, "marginBottom", "margin"),
            left: resolve_side(style, "marginLeft", "margin"),
        },
        padding: Edges {
            top: resolve_side(style, "paddingTop", "padding"),
            right: resolve_side(style, "paddingRight", "padding"),
            bottom: resolve_side(style, "paddingBottom", "padding"),
            left: resolve_side(style, "paddingLeft", "padding"),
        },
        border: Edges {
            top: resolve_border_side(style, "borderTopWidth"),
            right: resolve_border_side(style, "borderRightWidth"),
            bottom: resolve_border_side(style, "borderBottomWidth"),
            left: resolve_border_side(style, "borderLeftWidth"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_style_block;

    #[test]
    fn specific_side_wins_over_shorthand() {
        let style = parse_style_block("margin: 10; marginTop: 5;");
        let model = resolve_box_model(&style);
        assert_eq!(model.margin.top, 5.0);
        assert_eq!(model.margin.left, 10.0);
    }

    #[test]
    fn border_falls_back_through_three_levels() {
        let style = parse_style_block("border: 2;");
        let model = resolve_box_model(&style);
        assert_eq!(model.border.top, 2.0);
        assert_eq!(model.border.left, 2.0);
    }

    #[test]
    fn defaults_to_zero() {
        let style = parse_style_block("");
        let model = resolve_box_model(&style);
        assert_eq!(model, BoxModel::default());
    }
}
