//! Per-pass scratch cache mapping a node to its computed style,
//! resolved layout properties and box model (`spec.md` Design Notes:
//! "a side table keyed by node identity"). Cleared at the start of
//! every [`crate::tree_driver::run_pass`] call — nothing here survives
//! across passes.

use std::collections::HashMap;

use layout_style::{BoxModel, LayoutProperties, ParsedStyle};

use crate::node::Node;

/// One node's style results for the current pass.
#[derive(Clone)]
pub struct NodeStyleCache {
    pub computed: ParsedStyle,
    pub props: LayoutProperties,
    pub has_display: bool,
    pub box_model: BoxModel,
}

/// Keyed by node identity (`N: Clone + Eq + Hash`, per the `Node`
/// trait's bound) rather than by any index into a separate arena,
/// since the host owns the tree shape and only hands out node handles.
pub struct StyleCache<N: Node> {
    entries: HashMap<N, NodeStyleCache>,
}

impl<N: Node> StyleCache<N> {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn insert(
        &mut self,
        node: N,
        props: LayoutProperties,
        has_display: bool,
        box_model: BoxModel,
        computed: ParsedStyle,
    ) {
        self.entries.insert(node, NodeStyleCache { computed, props, has_display, box_model });
    }

    pub fn get(&self, node: &N) -> Option<&NodeStyleCache> {
        self.entries.get(node)
    }
}

impl<N: Node> Default for StyleCache<N> {
    fn default() -> Self {
        Self::new()
    }
}
