//! Projects a computed style into the layout-relevant subset with
//! defaults, mirroring `azul-layout`'s `RectLayout`-to-solver-input
//! step (the teacher reads `styled_node.layout.$field` with a default
//! fallback per field; here that's centralized into one constructor).

use crate::style::ParsedStyle;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Vertical,
    Horizontal,
    Grid,
}

impl Display {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "vertical" => Some(Display::Vertical),
            "horizontal" => Some(Display::Horizontal),
            "grid" => Some(Display::Grid),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Relative,
    Absolute,
    Anchor,
}

impl Position {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "relative" => Some(Position::Relative),
            "absolute" => Some(Position::Absolute),
            "anchor" => Some(Position::Anchor),
            _ => None,
        }
    }

    pub fn is_in_flow(self) -> bool {
        matches!(self, Position::Relative)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SelfAlign {
    #[default]
    Start,
    Center,
    End,
}

impl SelfAlign {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(SelfAlign::Start),
            "center" => Some(SelfAlign::Center),
            "end" => Some(SelfAlign::End),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
}

impl JustifyContent {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(JustifyContent::Start),
            "center" => Some(JustifyContent::Center),
            "end" => Some(JustifyContent::End),
            "space-between" => Some(JustifyContent::SpaceBetween),
            "space-around" => Some(JustifyContent::SpaceAround),
            _ => None,
        }
    }
}

/// The nine named anchor points of a rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AnchorPoint {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl AnchorPoint {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "top-left" => Some(AnchorPoint::TopLeft),
            "top" | "top-center" => Some(AnchorPoint::Top),
            "top-right" => Some(AnchorPoint::TopRight),
            "left" | "center-left" => Some(AnchorPoint::Left),
            "center" => Some(AnchorPoint::Center),
            "right" | "center-right" => Some(AnchorPoint::Right),
            "bottom-left" => Some(AnchorPoint::BottomLeft),
            "bottom" | "bottom-center" => Some(AnchorPoint::Bottom),
            "bottom-right" => Some(AnchorPoint::BottomRight),
            _ => None,
        }
    }

    /// Offset of this anchor point within a `(w, h)` rectangle.
    pub fn offset(self, w: f64, h: f64) -> (f64, f64) {
        match self {
            AnchorPoint::TopLeft => (0.0, 0.0),
            AnchorPoint::Top => (w / 2.0, 0.0),
            AnchorPoint::TopRight => (w, 0.0),
            AnchorPoint::Left => (0.0, h / 2.0),
            AnchorPoint::Center => (w / 2.0, h / 2.0),
            AnchorPoint::Right => (w, h / 2.0),
            AnchorPoint::BottomLeft => (0.0, h),
            AnchorPoint::Bottom => (w / 2.0, h),
            AnchorPoint::BottomRight => (w, h),
        }
    }
}

/// What an `anchor-target` resolves against, short of an explicit node
/// handle (which, when used, bypasses style text entirely and is
/// supplied directly through the engine API — see `DESIGN.md`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnchorTarget {
    #[default]
    None,
    Parent,
    Tag(String),
}

impl AnchorTarget {
    fn parse(s: &str) -> Self {
        if s == "parent" {
            AnchorTarget::Parent
        } else {
            AnchorTarget::Tag(s.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProperties {
    pub display: Display,
    pub position: Position,
    pub gap: f64,
    pub align_items: SelfAlign,
    pub justify_content: JustifyContent,
    pub align_self: Option<SelfAlign>,
    pub justify_self: SelfAlign,
    pub columns: u32,
    pub fit_content: bool,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub anchor_target: AnchorTarget,
    pub anchor_point: AnchorPoint,
    pub self_anchor: AnchorPoint,
    pub anchor_offset_x: f64,
    pub anchor_offset_y: f64,
    pub flex_grow: f64,
    pub flex_shrink: f64,
    pub flex_basis: Option<crate::value::PropertyValue>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

impl Default for LayoutProperties {
    fn default() -> Self {
        Self {
            display: Display::default(),
            position: Position::default(),
            gap: 0.0,
            align_items: SelfAlign::Start,
            justify_content: JustifyContent::Start,
            align_self: None,
            justify_self: SelfAlign::Start,
            columns: 2,
            fit_content: false,
            top: None,
            right: None,
            bottom: None,
            left: None,
            anchor_target: AnchorTarget::None,
            anchor_point: AnchorPoint::Center,
            self_anchor: AnchorPoint::Center,
            anchor_offset_x: 0.0,
            anchor_offset_y: 0.0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }
}

fn parse_enum_or_default<T: Copy>(
    style: &ParsedStyle,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> T {
    style
        .get_str(key)
        .and_then(parse)
        .unwrap_or(default)
}

impl LayoutProperties {
    /// Builds the layout-relevant view of a computed style, with
    /// defaults for anything absent or unrecognized. `display` is only
    /// meaningful if present in the style at all (absence means "no
    /// flow layouter runs"), so it's reported separately.
    pub fn from_style(style: &ParsedStyle) -> (Self, bool) {
        let has_display = style.get("display").is_some();

        let align_items_alias = style.get_str("alignment");
        let align_items = style
            .get_str("alignItems")
            .or(align_items_alias)
            .and_then(SelfAlign::parse)
            .unwrap_or(SelfAlign::Start);

        let props = LayoutProperties {
            display: parse_enum_or_default(style, "display", Display::parse, Display::Vertical),
            position: parse_enum_or_default(style, "position", Position::parse, Position::Relative),
            gap: style.get_f64("gap").unwrap_or(0.0),
            align_items,
            justify_content: parse_enum_or_default(
                style,
                "justifyContent",
                JustifyContent::parse,
                JustifyContent::Start,
            ),
            align_self: style.get_str("alignSelf").and_then(SelfAlign::parse),
            justify_self: parse_enum_or_default(style, "justifySelf", SelfAlign::parse, SelfAlign::Start),
            columns: style.get_f64("columns").map(|n| n.max(1.0) as u32).unwrap_or(2),
            fit_content: style.get_str("fitContent") == Some("true")
                || matches!(style.get("fitContent"), Some(v) if v.as_f64() == Some(1.0)),
            top: style.get_f64("top"),
            right: style.get_f64("right"),
            bottom: style.get_f64("bottom"),
            left: style.get_f64("left"),
            anchor_target: style
                .get_str("anchorTarget")
                .map(AnchorTarget::parse)
                .unwrap_or_default(),
            anchor_point: parse_enum_or_default(style, "anchorPoint", AnchorPoint::parse, AnchorPoint::Center),
            self_anchor: parse_enum_or_default(style, "selfAnchor", AnchorPoint::parse, AnchorPoint::Center),
            anchor_offset_x: style.get_f64("anchorOffsetX").unwrap_or(0.0),
            anchor_offset_y: style.get_f64("anchorOffsetY").unwrap_or(0.0),
            flex_grow: style.get_f64("flexGrow").unwrap_or(0.0),
            flex_shrink: style.get_f64("flexShrink").unwrap_or(1.0),
            flex_basis: style.get("flexBasis").cloned(),
            min_width: style.get_f64("minWidth"),
            max_width: style.get_f64("maxWidth"),
            min_height: style.get_f64("minHeight"),
            max_height: style.get_f64("maxHeight"),
        };

        (props, has_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_style_block;

    #[test]
    fn defaults_match_spec_table() {
        let style = parse_style_block("");
        let (props, has_display) = LayoutProperties::from_style(&style);
        assert!(!has_display);
        assert_eq!(props.display, Display::Vertical);
        assert_eq!(props.position, Position::Relative);
        assert_eq!(props.align_items, SelfAlign::Start);
        assert_eq!(props.justify_content, JustifyContent::Start);
        assert_eq!(props.columns, 2);
        assert!(!props.fit_content);
        assert_eq!(props.anchor_point, AnchorPoint::Center);
        assert_eq!(props.self_anchor, AnchorPoint::Center);
    }

    #[test]
    fn alignment_alias_honored() {
        let style = parse_style_block("alignment: center;");
        let (props, _) = LayoutProperties::from_style(&style);
        assert_eq!(props.align_items, SelfAlign::Center);
    }

    #[test]
    fn anchor_target_parent_literal() {
        let style = parse_style_block("anchor-target: parent;");
        let (props, _) = LayoutProperties::from_style(&style);
        assert_eq!(props.anchor_target, AnchorTarget::Parent);
    }

    #[test]
    fn anchor_target_tag_name() {
        let style = parse_style_block("anchorTarget: mainPanel;");
        let (props, _) = LayoutProperties::from_style(&style);
        assert_eq!(props.anchor_target, AnchorTarget::Tag("mainPanel".into()));
    }
}
