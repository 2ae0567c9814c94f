//! Style text parsing, cascade, box-model resolution and the
//! layout-relevant property view for the retained-mode layout engine.
//!
//! This crate has no notion of a scene graph or tree; it only turns
//! text into structured, defaulted data. `layout-core` consumes it.

pub mod box_model;
pub mod cascade;
pub mod parser;
pub mod properties;
pub mod style;
pub mod value;

pub use box_model::{resolve_box_model, BoxModel, Edges};
pub use cascade::StyleRegistry;
pub use parser::parse_style_block;
pub use properties::{
    AnchorPoint, AnchorTarget, Display, JustifyContent, LayoutProperties, Position, SelfAlign,
};
pub use style::ParsedStyle;
pub use value::PropertyValue;
