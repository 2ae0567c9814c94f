//! A minimal in-memory node implementation of the host `Node`
//! contract, used by this crate's own tests and exposed to
//! integration tests via the `test-util` feature. Grounded in the
//! parent/children arena shape of `azul-core::id_tree`, simplified to
//! an `Rc<RefCell<..>>` handle since the engine only needs identity
//! and interior mutability, not a full generational arena.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use crate::node::Node;

struct Inner {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    visible: bool,
    parent: Option<Weak<RefCell<Inner>>>,
    children: Vec<TestNode>,
    tags: HashSet<String>,
    classes: String,
    style: String,
    do_layout: Option<bool>,
}

/// A cheap, cloneable handle (`Rc` clone) into a test scene node.
#[derive(Clone)]
pub struct TestNode(Rc<RefCell<Inner>>);

impl TestNode {
    pub fn new(tag: &str, style_text: &str) -> Self {
        let mut tags = HashSet::new();
        if !tag.is_empty() {
            tags.insert(tag.to_string());
        }
        Self(Rc::new(RefCell::new(Inner {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            visible: true,
            parent: None,
            children: Vec::new(),
            tags,
            classes: String::new(),
            style: style_text.to_string(),
            do_layout: None,
        })))
    }

    pub fn add_child(&self, child: &TestNode) {
        child.0.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn set_classes(&self, classes: &str) {
        self.0.borrow_mut().classes = classes.to_string();
    }

    pub fn set_style_text(&self, style: &str) {
        self.0.borrow_mut().style = style.to_string();
    }

    pub fn set_visible(&self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    pub fn set_do_layout(&self, value: Option<bool>) {
        self.0.borrow_mut().do_layout = value;
    }

    pub fn add_tag(&self, tag: &str) {
        self.0.borrow_mut().tags.insert(tag.to_string());
    }
}

impl PartialEq for TestNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for TestNode {}

impl Hash for TestNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state)
    }
}

impl Node for TestNode {
    fn x(&self) -> f64 {
        self.0.borrow().x
    }
    fn y(&self) -> f64 {
        self.0.borrow().y
    }
    fn width(&self) -> f64 {
        self.0.borrow().width
    }
    fn height(&self) -> f64 {
        self.0.borrow().height
    }

    fn set_x(&self, value: f64) {
        self.0.borrow_mut().x = value;
    }
    fn set_y(&self, value: f64) {
        self.0.borrow_mut().y = value;
    }
    fn set_width(&self, value: f64) {
        self.0.borrow_mut().width = value;
    }
    fn set_height(&self, value: f64) {
        self.0.borrow_mut().height = value;
    }

    fn is_visible(&self) -> bool {
        self.0.borrow().visible
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.as_ref().and_then(|w| w.upgrade()).map(TestNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.0.borrow().tags.contains(tag)
    }

    fn tags(&self) -> Vec<String> {
        self.0.borrow().tags.iter().cloned().collect()
    }

    fn classes(&self) -> String {
        self.0.borrow().classes.clone()
    }

    fn style_text(&self) -> String {
        self.0.borrow().style.clone()
    }

    fn do_layout(&self) -> Option<bool> {
        self.0.borrow().do_layout
    }

    fn all_nodes(&self) -> Vec<Self> {
        fn root_of(node: &TestNode) -> TestNode {
            match node.parent() {
                Some(p) => root_of(&p),
                None => node.clone(),
            }
        }
        fn collect(node: &TestNode, out: &mut Vec<TestNode>) {
            out.push(node.clone());
            for child in node.children() {
                collect(&child, out);
            }
        }
        let root = root_of(self);
        let mut out = Vec::new();
        collect(&root, &mut out);
        out
    }
}
