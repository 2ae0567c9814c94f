//! End-to-end scenario tests built against the in-memory `TestNode`
//! harness, covering the worked examples and testable properties.

use layout_core::testing::TestNode;
use layout_core::{EngineConfig, LayoutEngine};

fn engine() -> LayoutEngine<TestNode> {
    LayoutEngine::new(EngineConfig::default())
}

#[test]
fn vertical_stack_fit_content() {
    let mut engine = engine();
    let root = TestNode::new("root", "display:vertical; padding:20; gap:10; fitContent:true; border:2;");
    root.set_x(100.0);
    root.set_y(100.0);

    let children: Vec<_> = (0..3)
        .map(|_| {
            let c = TestNode::new("child", "width:200; height:80; margin:5;");
            root.add_child(&c);
            c
        })
        .collect();

    engine.process_instance(&root);

    for c in &children {
        assert_eq!(c.width(), 200.0);
        assert_eq!(c.height(), 80.0);
    }
    assert_eq!(children[0].y(), 127.0);
    assert_eq!(children[1].y(), 227.0);
    assert_eq!(children[2].y(), 327.0);
    assert_eq!(root.height(), 334.0);
    assert_eq!(root.width(), 254.0);
}

#[test]
fn horizontal_content_with_header_and_footer() {
    let mut engine = engine();
    let root = TestNode::new("root-b", "display:vertical; padding:0; border:2;");
    root.set_width(800.0);
    root.set_height(400.0);

    let header = TestNode::new("header", "height:60; percentWidth:100;");
    let content = TestNode::new("content", "display:horizontal; height:280; percentWidth:100; fitContent:true;");
    let footer = TestNode::new("footer", "height:40; percentWidth:100;");
    root.add_child(&header);
    root.add_child(&content);
    root.add_child(&footer);

    let sidebar = TestNode::new("sidebar", "width:120; height:100;");
    let main = TestNode::new("main", "width:330; height:100;");
    content.add_child(&sidebar);
    content.add_child(&main);

    engine.process_instance(&root);

    assert_eq!(header.x(), root.x() + 2.0);
    assert_eq!(header.y(), root.y() + 2.0);
    assert_eq!(header.width(), 796.0);
    assert_eq!(header.height(), 60.0);

    assert_eq!(content.x(), root.x() + 2.0);
    assert_eq!(content.y(), root.y() + 62.0);
    assert_eq!(content.width(), 450.0);
    // fitContent recomputes both axes; content's height collapses to the
    // tallest child (100), overriding the explicit height:280.
    assert_eq!(content.height(), 100.0);
}

#[test]
fn flex_grow_distributes_by_ratio() {
    let mut engine = engine();
    let root = TestNode::new("row", "display:horizontal; width:500; padding:0; gap:0;");
    root.set_width(500.0);

    let child1 = TestNode::new("child1", "flexGrow:1;");
    let child2 = TestNode::new("child2", "flexGrow:2;");
    root.add_child(&child1);
    root.add_child(&child2);

    engine.process_instance(&root);

    assert!((child1.width() - 166.67).abs() < 0.1);
    assert!((child2.width() - 333.33).abs() < 0.1);
    assert!((child1.x() - root.x()).abs() < 0.1);
    assert!((child2.x() - (root.x() + 166.67)).abs() < 0.1);
}

#[test]
fn flex_shrink_with_min_width_clamp() {
    let mut engine = engine();
    let root = TestNode::new("row", "display:horizontal; padding:0; gap:0;");
    root.set_width(200.0);

    let children: Vec<_> = (0..3)
        .map(|_| {
            let c = TestNode::new("child", "width:100; flexShrink:1; minWidth:40;");
            root.add_child(&c);
            c
        })
        .collect();

    engine.process_instance(&root);

    for c in &children {
        assert!((c.width() - 66.7).abs() < 0.2);
    }
    let total: f64 = children.iter().map(|c| c.width()).sum();
    assert!((total - 200.0).abs() < 0.5);
}

#[test]
fn flex_shrink_min_width_overflow_is_accepted() {
    let mut engine = engine();
    let root = TestNode::new("row", "display:horizontal; padding:0; gap:0;");
    root.set_width(200.0);

    for _ in 0..3 {
        let c = TestNode::new("child", "width:100; flexShrink:1; minWidth:80;");
        root.add_child(&c);
    }

    engine.process_instance(&root);

    let total: f64 = root.children().iter().map(|c| c.width()).sum();
    assert!(total > 200.0, "clamped total {total} should overflow the container per spec");
}

#[test]
fn absolute_corner_positioning() {
    let mut engine = engine();
    let root = TestNode::new("parent", "padding:15; border:2;");
    root.set_width(500.0);
    root.set_height(400.0);

    let corner = TestNode::new("corner", "position:absolute; right:10; bottom:10; width:50; height:50;");
    root.add_child(&corner);

    engine.process_instance(&root);

    assert_eq!(corner.x(), 438.0);
    assert_eq!(corner.y(), 338.0);
}

#[test]
fn anchor_tooltip_above_target() {
    let mut engine = engine();
    let root = TestNode::new("scene", "");
    root.set_width(400.0);
    root.set_height(300.0);

    let target = TestNode::new("mainPanel", "width:200; height:150;");
    target.set_x(50.0);
    target.set_y(50.0);
    root.add_child(&target);

    let tooltip = TestNode::new(
        "tooltip",
        "width:120; height:40; position:anchor; anchorTarget:mainPanel; anchorPoint:top; selfAnchor:bottom; anchorOffsetY:-5;",
    );
    root.add_child(&tooltip);

    engine.process_instance(&root);

    assert_eq!(tooltip.x(), 90.0);
    assert_eq!(tooltip.y(), 5.0);
}

#[test]
fn cascade_ordering_and_importance() {
    let mut engine = engine();
    engine.register_class("a", "width: 100 !important;");
    engine.register_class("b", "width: 200;");

    let root = TestNode::new("root", "");
    let child = TestNode::new("child", "width: 300;");
    child.set_classes("a b");
    root.add_child(&child);

    engine.process_instance(&root);

    assert_eq!(child.width(), 100.0);
}

#[test]
fn invisible_and_excluded_nodes_are_skipped() {
    let mut engine = engine();
    let root = TestNode::new("root", "display:vertical; fitContent:true;");
    let visible = TestNode::new("visible", "height:50;");
    let hidden = TestNode::new("hidden", "height:999;");
    let excluded = TestNode::new("excluded", "height:999;");
    hidden.set_visible(false);
    excluded.set_do_layout(Some(false));
    root.add_child(&visible);
    root.add_child(&hidden);
    root.add_child(&excluded);

    engine.process_instance(&root);

    assert_eq!(root.height(), 50.0);
}

#[test]
fn fit_content_is_idempotent_across_passes() {
    let mut engine = engine();
    let root = TestNode::new("root", "display:vertical; padding:10; gap:5; fitContent:true;");
    for _ in 0..3 {
        let c = TestNode::new("child", "width:50; height:20;");
        root.add_child(&c);
    }

    engine.process_instance(&root);
    let (w1, h1) = (root.width(), root.height());
    engine.process_instance(&root);
    let (w2, h2) = (root.width(), root.height());

    assert_eq!(w1, w2);
    assert_eq!(h1, h2);
}

#[test]
fn debug_driver_reproduces_the_same_geometry_as_a_normal_pass() {
    let mut normal_engine = engine();
    let root_normal = TestNode::new("root", "display:vertical; padding:8; gap:4; fitContent:true;");
    let a = TestNode::new("a", "width:40; height:20;");
    let b = TestNode::new("b", "width:40; height:30;");
    root_normal.add_child(&a);
    root_normal.add_child(&b);
    normal_engine.process_instance(&root_normal);

    let mut debug_engine = engine();
    let root_debug = TestNode::new("root", "display:vertical; padding:8; gap:4; fitContent:true;");
    let da = TestNode::new("a", "width:40; height:20;");
    let db = TestNode::new("b", "width:40; height:30;");
    root_debug.add_child(&da);
    root_debug.add_child(&db);

    debug_engine.enable_debug_mode(&root_debug);
    let mut steps = 0;
    while debug_engine.next_step().is_some() {
        steps += 1;
    }
    assert!(steps > 0);
    assert!(!debug_engine.is_debug_mode_enabled());

    assert_eq!(root_debug.width(), root_normal.width());
    assert_eq!(root_debug.height(), root_normal.height());
    assert_eq!(da.y(), a.y());
    assert_eq!(db.y(), b.y());
}

#[test]
fn process_instance_is_noop_while_debug_armed() {
    let mut engine = engine();
    let root = TestNode::new("root", "display:vertical; padding:8;");
    root.set_width(100.0);
    root.set_height(50.0);

    engine.enable_debug_mode(&root);
    root.set_height(12345.0);
    engine.process_instance(&root);
    assert_eq!(root.height(), 12345.0);
    engine.disable_debug_mode();
}
