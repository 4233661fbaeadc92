//! Browser document backend.

use std::any::Any;

use leptos::mount::mount_to;
use leptos::prelude::ViewFn;
use mzl_core::dom::Document;
use mzl_types::{BoundingBox, DomError, Size};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Node};

/// [`Document`] over the page's `window.document`.
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// The current page's document.
    pub fn current() -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DomError::operation("window.document", "no document available"))?;
        Ok(Self { document })
    }
}

/// A Leptos view mounted into a popup node; dropping it unmounts the view.
pub struct MountedView {
    _handle: Box<dyn Any>,
}

/// Viewport-relative box of an element.
pub fn bounding_box(element: &Element) -> BoundingBox {
    let rect = element.get_bounding_client_rect();
    BoundingBox::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn js_error(operation: &str, error: &JsValue) -> DomError {
    DomError::operation(operation, error.as_string().unwrap_or_else(|| format!("{error:?}")))
}

impl Document for WebDocument {
    type Node = HtmlElement;
    type Content = ViewFn;
    type Rendered = MountedView;

    fn find_by_class(&self, class: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(&format!(".{class}"))
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn create_element(&self, class: &str) -> Result<HtmlElement, DomError> {
        let element = self
            .document
            .create_element("div")
            .map_err(|_| DomError::CreateElement { tag: "div".to_string() })?;
        element.set_class_name(class);
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::CreateElement { tag: "div".to_string() })
    }

    fn append_to_body(&self, node: &HtmlElement) -> Result<(), DomError> {
        let body = self.document.body().ok_or(DomError::MissingBody)?;
        body.append_child(node).map(drop).map_err(|e| js_error("appendChild", &e))
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<(), DomError> {
        parent.append_child(child).map(drop).map_err(|e| js_error("appendChild", &e))
    }

    fn remove_child(&self, parent: &HtmlElement, child: &HtmlElement) -> bool {
        self.is_child_of(parent, child) && parent.remove_child(child).is_ok()
    }

    fn is_child_of(&self, parent: &HtmlElement, child: &HtmlElement) -> bool {
        let parent: &Node = parent;
        child.parent_node().is_some_and(|node| node.is_same_node(Some(parent)))
    }

    fn toggle_class(&self, node: &HtmlElement, class: &str, on: bool) {
        if let Err(e) = node.class_list().toggle_with_force(class, on) {
            log::warn!("classList.toggle({class}) failed: {e:?}");
        }
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = node.style().set_property(property, value) {
            log::warn!("style.setProperty({property}) failed: {e:?}");
        }
    }

    /// Layout size, ignoring CSS transforms such as the closed-state scale.
    fn measure(&self, node: &HtmlElement) -> Size {
        Size::new(f64::from(node.offset_width()), f64::from(node.offset_height()))
    }

    fn viewport(&self) -> Option<Size> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Size::new(width, height))
    }

    fn render_content(
        &self,
        node: &HtmlElement,
        content: &ViewFn,
    ) -> Result<MountedView, DomError> {
        let content = content.clone();
        let handle = mount_to(node.clone(), move || content.run());
        Ok(MountedView { _handle: Box::new(handle) })
    }
}
