//! Step-by-step debug driver (`spec.md` §4.11): exposes phases 1-7 as
//! a lazy sequence of steps, one node-visit sub-phase at a time,
//! modeled as an explicit stack of resumable frames since the target
//! has no native generators (`spec.md` §9 Design Notes).
//!
//! While a [`DebugDriver`] is armed, the normal tick-driven
//! [`crate::engine::LayoutEngine::process_instance`] becomes a no-op
//! (enforced by the engine, not here) so that the tree is only
//! mutated one step at a time, under the caller's control.

use layout_style::{ParsedStyle, StyleRegistry};

use crate::config::EngineConfig;
use crate::node::Node;
use crate::style_cache::StyleCache;
use crate::tree_driver::{
    apply_fit_content, compute_node_style, is_percent_sized, position_out_of_flow_child,
    reapply_percent_sizing, run_flow_layout, surviving_children, ChildInfo, ParentGeometry,
};

/// A snapshot of one node's tags, classes, geometry and effective
/// style at the moment a step was produced — not a live handle, so it
/// stays valid after the tree moves on.
#[derive(Debug, Clone)]
pub struct NodeSnapshot {
    pub tags: Vec<String>,
    pub classes: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: ParsedStyle,
}

impl NodeSnapshot {
    fn capture<N: Node>(node: &N, style: ParsedStyle) -> Self {
        Self {
            tags: node.tags(),
            classes: node.classes(),
            x: node.x(),
            y: node.y(),
            width: node.width(),
            height: node.height(),
            style,
        }
    }
}

/// One unit of debug-stepped work: a human-readable label, a snapshot
/// of the subject node, and per-child snapshots where the step
/// concerns a layout of children (flow / grid / fit-content).
#[derive(Debug, Clone)]
pub struct DebugStep {
    pub label: String,
    pub subject: NodeSnapshot,
    pub children: Vec<NodeSnapshot>,
}

#[derive(Clone, Copy)]
enum Phase {
    Style,
    RecurseInFlow(usize),
    Flow,
    FitContent,
    RecurseOutOfFlow(usize),
    PositionOutOfFlow(usize),
    Done,
}

struct Frame<N: Node> {
    node: N,
    parent: Option<ParentGeometry>,
    is_root: bool,
    phase: Phase,
    self_geom: Option<ParentGeometry>,
    in_flow: Vec<ChildInfo<N>>,
    out_of_flow: Vec<ChildInfo<N>>,
}

/// Drives a single armed debug session from one root. Each call to
/// [`DebugDriver::advance`] performs and reports exactly one
/// sub-phase's worth of work; the tree is mutated incrementally as
/// the session progresses, exactly as a normal pass would mutate it,
/// just paused between steps.
pub struct DebugDriver<N: Node> {
    registry: StyleRegistry,
    config: EngineConfig,
    cache: StyleCache<N>,
    stack: Vec<Frame<N>>,
}

impl<N: Node> DebugDriver<N> {
    pub fn new(root: N, registry: StyleRegistry, config: EngineConfig) -> Self {
        let mut cache = StyleCache::new();
        cache.clear();
        Self {
            registry,
            config,
            cache,
            stack: vec![Frame {
                node: root,
                parent: None,
                is_root: true,
                phase: Phase::Style,
                self_geom: None,
                in_flow: Vec::new(),
                out_of_flow: Vec::new(),
            }],
        }
    }

    /// Whether the step sequence is exhausted.
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    fn snapshot_children(&self, frame_index: usize) -> Vec<NodeSnapshot> {
        self.stack[frame_index]
            .in_flow
            .iter()
            .map(|c| {
                let style = self.cache.get(&c.node).map(|e| e.computed.clone()).unwrap_or_default();
                NodeSnapshot::capture(&c.node, style)
            })
            .collect()
    }

    /// Advances one step. Returns `None` once the sequence is
    /// exhausted (the terminal indicator); the driver stays
    /// idempotently exhausted after that.
    pub fn advance(&mut self) -> Option<DebugStep> {
        loop {
            let top = self.stack.len().checked_sub(1)?;
            let phase = self.stack[top].phase;

            match phase {
                Phase::Style => {
                    let node = self.stack[top].node.clone();
                    let parent = self.stack[top].parent;
                    let is_root = self.stack[top].is_root;

                    compute_node_style(&mut self.cache, &self.registry, &node, parent, is_root);
                    let entry = self.cache.get(&node).expect("just inserted").clone();

                    let self_geom = ParentGeometry {
                        x: node.x(),
                        y: node.y(),
                        width: node.width(),
                        height: node.height(),
                        model: entry.box_model,
                    };

                    let mut in_flow = Vec::new();
                    let mut out_of_flow = Vec::new();
                    for child in surviving_children(&node) {
                        compute_node_style(&mut self.cache, &self.registry, &child, Some(self_geom), false);
                        let centry = self.cache.get(&child).expect("just inserted");
                        let info = ChildInfo {
                            node: child.clone(),
                            props: centry.props.clone(),
                            box_model: centry.box_model,
                            percent_sized: is_percent_sized(&centry.computed),
                        };
                        if info.props.position.is_in_flow() {
                            in_flow.push(info);
                        } else {
                            out_of_flow.push(info);
                        }
                    }

                    let step = DebugStep {
                        label: format!("style resolved for {:?}", node.tags()),
                        subject: NodeSnapshot::capture(&node, entry.computed),
                        children: Vec::new(),
                    };

                    let frame = &mut self.stack[top];
                    frame.self_geom = Some(self_geom);
                    frame.in_flow = in_flow;
                    frame.out_of_flow = out_of_flow;
                    frame.phase = Phase::RecurseInFlow(0);
                    return Some(step);
                }

                Phase::RecurseInFlow(i) => {
                    if i < self.stack[top].in_flow.len() {
                        let child_node = self.stack[top].in_flow[i].node.clone();
                        let parent_geom = self.stack[top].self_geom;
                        self.stack[top].phase = Phase::RecurseInFlow(i + 1);
                        self.stack.push(Frame {
                            node: child_node,
                            parent: parent_geom,
                            is_root: false,
                            phase: Phase::Style,
                            self_geom: None,
                            in_flow: Vec::new(),
                            out_of_flow: Vec::new(),
                        });
                        continue;
                    }
                    self.stack[top].phase = Phase::Flow;
                    continue;
                }

                Phase::Flow => {
                    let node = self.stack[top].node.clone();
                    let entry = self.cache.get(&node).expect("present").clone();
                    self.stack[top].phase = Phase::FitContent;

                    if entry.has_display && entry.props.position.is_in_flow() {
                        let in_flow = &self.stack[top].in_flow;
                        run_flow_layout(&node, &entry.props, &entry.box_model, in_flow, &self.config);
                        let children = self.snapshot_children(top);
                        return Some(DebugStep {
                            label: format!("flow layout ({:?}) for {:?}", entry.props.display, node.tags()),
                            subject: NodeSnapshot::capture(&node, entry.computed),
                            children,
                        });
                    }
                    continue;
                }

                Phase::FitContent => {
                    let node = self.stack[top].node.clone();
                    let entry = self.cache.get(&node).expect("present").clone();
                    self.stack[top].phase = Phase::RecurseOutOfFlow(0);

                    if entry.props.fit_content {
                        {
                            let in_flow = &self.stack[top].in_flow;
                            apply_fit_content(&node, &entry.props, &entry.box_model, in_flow);
                        }

                        let any_percent = self.stack[top].in_flow.iter().any(|c| c.percent_sized);
                        if any_percent {
                            let new_geom = ParentGeometry {
                                x: node.x(),
                                y: node.y(),
                                width: node.width(),
                                height: node.height(),
                                model: entry.box_model,
                            };
                            let child_nodes: Vec<N> = self.stack[top].in_flow.iter().map(|c| c.node.clone()).collect();
                            for child in &child_nodes {
                                reapply_percent_sizing(&mut self.cache, &self.registry, child, new_geom);
                            }
                            if entry.has_display {
                                let in_flow = &self.stack[top].in_flow;
                                run_flow_layout(&node, &entry.props, &entry.box_model, in_flow, &self.config);
                            }
                        } else if entry.has_display
                            && self.stack[top].in_flow.iter().any(|c| c.props.flex_grow > 0.0 || c.props.flex_shrink > 0.0)
                        {
                            // No percent-sized children, but flex items still need to be
                            // redistributed against the container's post-fit-content size.
                            let in_flow = &self.stack[top].in_flow;
                            run_flow_layout(&node, &entry.props, &entry.box_model, in_flow, &self.config);
                        }

                        let children = self.snapshot_children(top);
                        return Some(DebugStep {
                            label: format!("fit-content resize for {:?}", node.tags()),
                            subject: NodeSnapshot::capture(&node, entry.computed),
                            children,
                        });
                    }
                    continue;
                }

                Phase::RecurseOutOfFlow(i) => {
                    if i < self.stack[top].out_of_flow.len() {
                        let child_node = self.stack[top].out_of_flow[i].node.clone();
                        let node = self.stack[top].node.clone();
                        let entry = self.cache.get(&node).expect("present");
                        let final_geom = ParentGeometry {
                            x: node.x(),
                            y: node.y(),
                            width: node.width(),
                            height: node.height(),
                            model: entry.box_model,
                        };
                        self.stack[top].phase = Phase::PositionOutOfFlow(i);
                        self.stack.push(Frame {
                            node: child_node,
                            parent: Some(final_geom),
                            is_root: false,
                            phase: Phase::Style,
                            self_geom: None,
                            in_flow: Vec::new(),
                            out_of_flow: Vec::new(),
                        });
                        continue;
                    }
                    self.stack[top].phase = Phase::Done;
                    continue;
                }

                Phase::PositionOutOfFlow(i) => {
                    let node = self.stack[top].node.clone();
                    let child_node = self.stack[top].out_of_flow[i].node.clone();
                    let entry = self.cache.get(&node).expect("present").clone();
                    let final_geom = ParentGeometry {
                        x: node.x(),
                        y: node.y(),
                        width: node.width(),
                        height: node.height(),
                        model: entry.box_model,
                    };
                    position_out_of_flow_child(&self.cache, &child_node, Some(final_geom));
                    self.stack[top].phase = Phase::RecurseOutOfFlow(i + 1);

                    let child_style = self.cache.get(&child_node).expect("present").computed.clone();
                    return Some(DebugStep {
                        label: format!("out-of-flow positioned {:?}", child_node.tags()),
                        subject: NodeSnapshot::capture(&child_node, child_style),
                        children: Vec::new(),
                    });
                }

                Phase::Done => {
                    self.stack.pop();
                    continue;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestNode;

    #[test]
    fn steps_through_a_vertical_stack_and_terminates() {
        let root = TestNode::new("root", "display:vertical; padding:10; gap:5;");
        root.set_width(300.0);
        root.set_height(0.0);
        let child_a = TestNode::new("a", "height:40;");
        let child_b = TestNode::new("b", "height:40;");
        root.add_child(&child_a);
        root.add_child(&child_b);

        let registry = StyleRegistry::new();
        let mut driver = DebugDriver::new(root.clone(), registry, EngineConfig::default());

        let mut labels = Vec::new();
        while let Some(step) = driver.advance() {
            labels.push(step.label);
        }

        assert!(driver.is_finished());
        assert!(driver.advance().is_none());
        assert!(labels.iter().any(|l| l.contains("style resolved")));
        assert!(labels.iter().any(|l| l.contains("flow layout")));
        assert_eq!(child_a.height(), 40.0);
    }
}
