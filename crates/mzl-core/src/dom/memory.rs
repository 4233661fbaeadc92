//! In-memory document.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use mzl_types::{DomError, Size};

use super::Document;

/// Handle to a node of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<NodeData>,
    body: NodeId,
    rendered_size: Size,
    viewport: Option<Size>,
    removals: usize,
    refuse_create: bool,
}

impl Tree {
    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0)
    }

    fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.body {
                return true;
            }
            current = self.node(node).and_then(|data| data.parent);
        }
        false
    }

    fn detach(&mut self, child: NodeId) -> bool {
        let Some(parent) = self.node(child).and_then(|data| data.parent) else {
            return false;
        };
        if let Some(data) = self.node_mut(parent) {
            data.children.retain(|c| *c != child);
        }
        if let Some(data) = self.node_mut(child) {
            data.parent = None;
        }
        true
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return Err(DomError::operation("appendChild", "unknown node"));
        }
        self.detach(child);
        if let Some(data) = self.node_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.node_mut(parent) {
            data.children.push(child);
        }
        Ok(())
    }
}

/// Headless document tree.
///
/// Clones share the same tree, so several controllers can be pointed at one
/// page. Every attached node measures as the configured rendered size.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub const DEFAULT_RENDERED_SIZE: Size = Size::new(120.0, 32.0);

    pub fn new() -> Self {
        let body = NodeData { classes: vec!["body".to_string()], ..NodeData::default() };
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![body],
                body: NodeId(0),
                rendered_size: Self::DEFAULT_RENDERED_SIZE,
                viewport: None,
                removals: 0,
                refuse_create: false,
            })),
        }
    }

    pub fn body(&self) -> NodeId {
        self.tree.borrow().body
    }

    /// Size reported by [`Document::measure`] for attached nodes.
    pub fn set_rendered_size(&self, size: Size) {
        self.tree.borrow_mut().rendered_size = size;
    }

    pub fn set_viewport(&self, viewport: Option<Size>) {
        self.tree.borrow_mut().viewport = viewport;
    }

    /// Make element creation fail, as a host without a usable document would.
    pub fn refuse_element_creation(&self, refuse: bool) {
        self.tree.borrow_mut().refuse_create = refuse;
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.borrow().node(node).map(|data| data.children.clone()).unwrap_or_default()
    }

    /// Attached nodes carrying `class`.
    pub fn count_by_class(&self, class: &str) -> usize {
        let tree = self.tree.borrow();
        (0..tree.nodes.len())
            .map(NodeId)
            .filter(|id| tree.is_attached(*id))
            .filter(|id| tree.node(*id).is_some_and(|data| data.classes.iter().any(|c| c == class)))
            .count()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.borrow().node(node).is_some_and(|data| data.classes.iter().any(|c| c == class))
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree.borrow().node(node).and_then(|data| data.styles.get(property).cloned())
    }

    pub fn text(&self, node: NodeId) -> Option<String> {
        self.tree.borrow().node(node).and_then(|data| data.text.clone())
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.tree.borrow().is_attached(node)
    }

    /// Number of successful `remove_child` calls so far.
    pub fn removals(&self) -> usize {
        self.tree.borrow().removals
    }

    /// Detach a node behind the widgets' back, as unrelated page code might.
    pub fn detach_externally(&self, node: NodeId) -> bool {
        self.tree.borrow_mut().detach(node)
    }
}

/// Rendered text content; clears the node's text when dropped.
#[derive(Debug)]
pub struct RenderedText {
    tree: Weak<RefCell<Tree>>,
    node: NodeId,
}

impl Drop for RenderedText {
    fn drop(&mut self) {
        if let Some(tree) = self.tree.upgrade() {
            if let Some(data) = tree.borrow_mut().node_mut(self.node) {
                data.text = None;
            }
        }
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;
    type Content = Rc<str>;
    type Rendered = RenderedText;

    fn find_by_class(&self, class: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        (0..tree.nodes.len()).map(NodeId).find(|id| {
            tree.is_attached(*id)
                && tree.node(*id).is_some_and(|data| data.classes.iter().any(|c| c == class))
        })
    }

    fn create_element(&self, class: &str) -> Result<NodeId, DomError> {
        let mut tree = self.tree.borrow_mut();
        if tree.refuse_create {
            return Err(DomError::CreateElement { tag: "div".to_string() });
        }
        tree.nodes.push(NodeData { classes: vec![class.to_string()], ..NodeData::default() });
        Ok(NodeId(tree.nodes.len() - 1))
    }

    fn append_to_body(&self, node: &NodeId) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let body = tree.body;
        tree.attach(body, *node)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        self.tree.borrow_mut().attach(*parent, *child)
    }

    fn remove_child(&self, parent: &NodeId, child: &NodeId) -> bool {
        let mut tree = self.tree.borrow_mut();
        if tree.node(*child).and_then(|data| data.parent) != Some(*parent) {
            return false;
        }
        let removed = tree.detach(*child);
        if removed {
            tree.removals += 1;
        }
        removed
    }

    fn is_child_of(&self, parent: &NodeId, child: &NodeId) -> bool {
        self.tree.borrow().node(*child).and_then(|data| data.parent) == Some(*parent)
    }

    fn toggle_class(&self, node: &NodeId, class: &str, on: bool) {
        let mut tree = self.tree.borrow_mut();
        let Some(data) = tree.node_mut(*node) else {
            return;
        };
        let present = data.classes.iter().any(|c| c == class);
        if on && !present {
            data.classes.push(class.to_string());
        } else if !on && present {
            data.classes.retain(|c| c != class);
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        if let Some(data) = self.tree.borrow_mut().node_mut(*node) {
            data.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn measure(&self, node: &NodeId) -> Size {
        let tree = self.tree.borrow();
        if tree.is_attached(*node) { tree.rendered_size } else { Size::default() }
    }

    fn viewport(&self) -> Option<Size> {
        self.tree.borrow().viewport
    }

    fn render_content(&self, node: &NodeId, content: &Rc<str>) -> Result<RenderedText, DomError> {
        let mut tree = self.tree.borrow_mut();
        let data = tree
            .node_mut(*node)
            .ok_or_else(|| DomError::operation("renderContent", "unknown node"))?;
        data.text = Some(content.to_string());
        Ok(RenderedText { tree: Rc::downgrade(&self.tree), node: *node })
    }
}
