//! The host contract (`spec.md` §6): everything the engine needs to
//! read from and write to a scene-graph node. The engine never
//! creates or destroys nodes and never owns the tree; `Node` is a
//! cheap, cloneable handle into host-owned storage (mirroring
//! `azul-core::id_tree::NodeId` as a handle into a `NodeDataContainer`
//! the solver never allocates itself).

/// A rectangular visual node the engine can read and position.
///
/// Implementors are expected to be cheap `Clone` handles (an index, an
/// `Rc`, a generational arena key) since the engine clones nodes
/// freely while walking the tree and uses them as `HashMap` keys for
/// its per-pass scratch cache.
pub trait Node: Clone + Eq + std::hash::Hash {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_x(&self, value: f64);
    fn set_y(&self, value: f64);
    fn set_width(&self, value: f64);
    fn set_height(&self, value: f64);

    fn is_visible(&self) -> bool;

    fn parent(&self) -> Option<Self>;
    /// Ordered children.
    fn children(&self) -> Vec<Self>;

    fn has_tag(&self, tag: &str) -> bool;
    fn tags(&self) -> Vec<String>;

    /// Whitespace-separated class name list.
    fn classes(&self) -> String;
    /// The raw inline style text block.
    fn style_text(&self) -> String;

    /// `None` when the attribute is absent (node participates in
    /// layout); `Some(false)` excludes it.
    fn do_layout(&self) -> Option<bool>;

    /// Every node the host currently exposes, across all of its object
    /// types, for anchor tag resolution (`spec.md` §4.10). A host with
    /// many nodes should maintain a tag index and implement this via a
    /// lookup rather than a full scene walk; see `spec.md` §9.
    fn all_nodes(&self) -> Vec<Self>;
}
