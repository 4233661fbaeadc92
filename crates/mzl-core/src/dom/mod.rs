//! Document seam.
//!
//! The overlay container and popup renderer only talk to the page through
//! [`Document`]. The browser backend lives in the Leptos crate; [`MemoryDocument`]
//! is a headless tree used by tests and non-browser hosts.

mod memory;

pub use memory::{MemoryDocument, NodeId, RenderedText};

use mzl_types::{DomError, Size};

/// Minimal DOM surface needed to host tooltip popups.
///
/// Lookups and removals of nodes that are already gone must not fail:
/// they return `None`/`false`.
pub trait Document {
    /// Handle to an element. Cloning the handle must not clone the element.
    type Node: Clone;
    /// Caller-owned renderable payload.
    type Content;
    /// Keeps rendered content alive; dropping it tears the content down.
    type Rendered;

    /// First element carrying `class`, anywhere in the document.
    fn find_by_class(&self, class: &str) -> Option<Self::Node>;

    /// Create a detached `<div>` carrying `class`.
    fn create_element(&self, class: &str) -> Result<Self::Node, DomError>;

    fn append_to_body(&self, node: &Self::Node) -> Result<(), DomError>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Detach `child` from `parent`. Returns `false` if it was not a child.
    fn remove_child(&self, parent: &Self::Node, child: &Self::Node) -> bool;

    fn is_child_of(&self, parent: &Self::Node, child: &Self::Node) -> bool;

    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool);

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Layout size of a node. Zero when the node is not laid out.
    fn measure(&self, node: &Self::Node) -> Size;

    /// Visible viewport size, if the host knows it.
    fn viewport(&self) -> Option<Size>;

    /// Render `content` as the only child content of `node`.
    fn render_content(
        &self,
        node: &Self::Node,
        content: &Self::Content,
    ) -> Result<Self::Rendered, DomError>;
}
