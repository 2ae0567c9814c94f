//! Tree driver, flow layouters, out-of-flow positioners and debug
//! driver for a retained-mode scene graph, built on top of
//! `layout-style`'s parsing/cascade/box-model layer.
//!
//! A host implements [`Node`] for its own scene-graph handle type and
//! drives the engine through [`LayoutEngine`].

pub mod config;
pub mod debug;
pub mod error;
pub mod fit_content;
pub mod flow;
pub mod geometry;
pub mod node;
pub mod percent;
pub mod positioning;
pub mod style_cache;
pub mod tree_driver;

mod engine;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use config::EngineConfig;
pub use debug::{DebugStep, NodeSnapshot};
pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use node::Node;
