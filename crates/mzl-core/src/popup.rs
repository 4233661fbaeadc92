//! Popup renderer: the floating node shown next to a trigger.

use mzl_types::{Alignment, BoundingBox, DomError, Position, TooltipConfig};
use tracing::{debug, trace};

use crate::dom::Document;
use crate::overlay::{ensure_container, OverlayContainer};
use crate::position::{compute_position_with_gap, fit_to_viewport};

/// Marker class of popup nodes.
pub const POPUP_CLASS: &str = "mzl_position";
/// Class present while the popup is visually open.
pub const OPEN_CLASS: &str = "mzl_position--open";

/// Everything needed to draw one popup for one hover cycle.
///
/// `content` is the caller's payload handle; it is shared, not copied.
#[derive(Debug, Clone)]
pub struct TooltipInstance<C> {
    /// Trigger box snapshotted at pointer-enter; never re-measured while shown
    pub bounding_box: BoundingBox,
    pub content: C,
    pub align: Alignment,
    pub color: String,
    pub z_index: i32,
    pub gap: f64,
    pub fit_viewport: bool,
}

impl<C> TooltipInstance<C> {
    pub fn new(bounding_box: BoundingBox, content: C, config: &TooltipConfig) -> Self {
        Self {
            bounding_box,
            content,
            align: config.align,
            color: config.color.clone(),
            z_index: config.z_index,
            gap: config.gap,
            fit_viewport: config.fit_viewport,
        }
    }
}

/// Draws a popup and owns its open/closed visual state.
pub trait PopupRenderer {
    type Content: Clone;

    /// Build the popup, or update it in place if already mounted.
    fn mount(&mut self, instance: &TooltipInstance<Self::Content>) -> Result<(), DomError>;

    /// Show or hide the mounted popup. Repeating the current state is a no-op.
    fn set_open(&mut self, open: bool);

    /// Detach the popup. A no-op when nothing is mounted.
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    fn is_open(&self) -> bool;

    /// Where the popup was last placed, while mounted.
    fn position(&self) -> Option<Position>;
}

/// [`PopupRenderer`] drawing into the overlay container of a [`Document`].
pub struct DomPopup<D: Document> {
    document: D,
    container: OverlayContainer<D::Node>,
    node: Option<D::Node>,
    rendered: Option<D::Rendered>,
    open: bool,
    placement: Option<(Position, Alignment)>,
}

impl<D: Document> DomPopup<D> {
    /// Create a renderer, making sure the overlay container exists.
    pub fn new(document: D) -> Result<Self, DomError> {
        let container = ensure_container(&document)?;
        Ok(Self { document, container, node: None, rendered: None, open: false, placement: None })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn container(&self) -> &OverlayContainer<D::Node> {
        &self.container
    }

    /// The popup node, while mounted.
    pub fn node(&self) -> Option<&D::Node> {
        self.node.as_ref()
    }

    /// Alignment actually used for the last placement (after viewport fitting).
    pub fn placed_alignment(&self) -> Option<Alignment> {
        self.placement.map(|(_, align)| align)
    }

    fn fresh_node(&mut self) -> Result<D::Node, DomError> {
        // The page may have dropped the container since we last looked.
        self.container = ensure_container(&self.document)?;
        let node = self.document.create_element(POPUP_CLASS)?;
        self.open = false;
        Ok(node)
    }

    fn place(&mut self, node: &D::Node, instance: &TooltipInstance<D::Content>) {
        let size = self.document.measure(node);
        let (position, align) = match self.document.viewport() {
            Some(viewport) if instance.fit_viewport => fit_to_viewport(
                instance.bounding_box,
                size,
                instance.align,
                instance.gap,
                viewport,
            ),
            _ => {
                let align = instance.align;
                (compute_position_with_gap(instance.bounding_box, size, align, instance.gap), align)
            },
        };

        if let Some((_, previous)) = self.placement {
            if previous != align {
                self.document.toggle_class(node, &placement_class(previous), false);
            }
        }
        self.document.toggle_class(node, &placement_class(align), true);
        self.document.set_style(node, "left", &format!("{}px", position.left));
        self.document.set_style(node, "top", &format!("{}px", position.top));
        self.placement = Some((position, align));

        debug!(
            left = position.left,
            top = position.top,
            width = size.width,
            height = size.height,
            align = %align,
            "Popup placed"
        );
    }
}

impl<D: Document> PopupRenderer for DomPopup<D>
where
    D::Content: Clone,
{
    type Content = D::Content;

    fn mount(&mut self, instance: &TooltipInstance<D::Content>) -> Result<(), DomError> {
        let node = match self.node.clone() {
            Some(node) => node,
            None => self.fresh_node()?,
        };

        // Old content goes before new content renders.
        self.rendered = None;
        self.rendered = Some(self.document.render_content(&node, &instance.content)?);

        self.document.set_style(&node, "position", "fixed");
        self.document.set_style(&node, "background-color", &instance.color);
        self.document.set_style(&node, "z-index", &instance.z_index.to_string());

        if !self.document.is_child_of(self.container.node(), &node) {
            self.document.append_child(self.container.node(), &node)?;
        }
        self.node = Some(node.clone());

        // Measured after insertion: the popup must be laid out to have a size.
        self.place(&node, instance);
        Ok(())
    }

    fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        let Some(node) = &self.node else {
            trace!(open, "set_open ignored, popup not mounted");
            return;
        };
        self.document.toggle_class(node, OPEN_CLASS, open);
        self.open = open;
    }

    fn unmount(&mut self) {
        if let Some(node) = self.node.take() {
            if !self.document.remove_child(self.container.node(), &node) {
                debug!("Popup node was already detached");
            }
        }
        self.rendered = None;
        self.open = false;
        self.placement = None;
    }

    fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn position(&self) -> Option<Position> {
        self.placement.map(|(position, _)| position)
    }
}

fn placement_class(align: Alignment) -> String {
    format!("{POPUP_CLASS}--{align}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use mzl_types::Size;
    use std::rc::Rc;

    fn instance(text: &str) -> TooltipInstance<Rc<str>> {
        TooltipInstance::new(
            BoundingBox::new(100.0, 200.0, 80.0, 30.0),
            Rc::from(text),
            &TooltipConfig::default(),
        )
    }

    #[test]
    fn test_mount_places_popup_in_container() {
        let doc = MemoryDocument::new();
        doc.set_rendered_size(Size::new(40.0, 20.0));
        let mut popup = DomPopup::new(doc.clone()).unwrap();

        popup.mount(&instance("hi")).unwrap();

        let node = *popup.node().unwrap();
        assert_eq!(doc.children(*popup.container().node()), vec![node]);
        assert_eq!(doc.text(node).as_deref(), Some("hi"));
        assert_eq!(doc.style(node, "left").as_deref(), Some("120px"));
        assert_eq!(doc.style(node, "top").as_deref(), Some("172px"));
        assert_eq!(doc.style(node, "z-index").as_deref(), Some("1011"));
        assert_eq!(doc.style(node, "background-color").as_deref(), Some("#000"));
        assert!(doc.has_class(node, "mzl_position--top"));
        assert!(!popup.is_open());
    }

    #[test]
    fn test_remount_reuses_node() {
        let doc = MemoryDocument::new();
        let mut popup = DomPopup::new(doc.clone()).unwrap();

        popup.mount(&instance("first")).unwrap();
        let node = *popup.node().unwrap();
        popup.mount(&instance("second")).unwrap();

        assert_eq!(popup.node(), Some(&node));
        assert_eq!(doc.count_by_class(POPUP_CLASS), 1);
        assert_eq!(doc.text(node).as_deref(), Some("second"));
    }

    #[test]
    fn test_set_open_is_idempotent() {
        let doc = MemoryDocument::new();
        let mut popup = DomPopup::new(doc.clone()).unwrap();
        popup.mount(&instance("hi")).unwrap();
        let node = *popup.node().unwrap();

        popup.set_open(true);
        let classes_once = doc.has_class(node, OPEN_CLASS);
        popup.set_open(true);

        assert!(classes_once);
        assert!(doc.has_class(node, OPEN_CLASS));
        assert!(popup.is_open());

        popup.set_open(false);
        popup.set_open(false);
        assert!(!doc.has_class(node, OPEN_CLASS));
        assert!(!popup.is_open());
    }

    #[test]
    fn test_set_open_without_mount_is_noop() {
        let doc = MemoryDocument::new();
        let mut popup = DomPopup::new(doc).unwrap();
        popup.set_open(true);
        assert!(!popup.is_open());
    }

    #[test]
    fn test_unmount_tolerates_external_removal() {
        let doc = MemoryDocument::new();
        let mut popup = DomPopup::new(doc.clone()).unwrap();
        popup.mount(&instance("hi")).unwrap();
        let node = *popup.node().unwrap();

        assert!(doc.detach_externally(node));
        popup.unmount();
        popup.unmount();

        assert!(!popup.is_mounted());
        assert_eq!(doc.removals(), 0);
        assert_eq!(doc.text(node), None);
    }

    #[test]
    fn test_unmeasured_popup_sits_at_trigger_origin() {
        let doc = MemoryDocument::new();
        doc.set_rendered_size(Size::default());
        let mut popup = DomPopup::new(doc).unwrap();
        popup.mount(&instance("hi")).unwrap();
        assert_eq!(popup.position(), Some(Position::new(100.0, 200.0)));
    }

    #[test]
    fn test_fit_viewport_flips_and_swaps_placement_class() {
        let doc = MemoryDocument::new();
        doc.set_rendered_size(Size::new(40.0, 20.0));
        doc.set_viewport(Some(Size::new(800.0, 600.0)));
        let mut popup = DomPopup::new(doc.clone()).unwrap();

        let config = TooltipConfig { fit_viewport: true, ..TooltipConfig::default() };
        let near_top =
            TooltipInstance::new(BoundingBox::new(100.0, 5.0, 80.0, 30.0), Rc::from("hi"), &config);
        popup.mount(&near_top).unwrap();
        let node = *popup.node().unwrap();
        assert_eq!(popup.placed_alignment(), Some(Alignment::Bottom));
        assert!(doc.has_class(node, "mzl_position--bottom"));

        let roomy_box = BoundingBox::new(100.0, 300.0, 80.0, 30.0);
        let roomy = TooltipInstance::new(roomy_box, Rc::from("hi"), &config);
        popup.mount(&roomy).unwrap();
        assert_eq!(popup.placed_alignment(), Some(Alignment::Top));
        assert!(doc.has_class(node, "mzl_position--top"));
        assert!(!doc.has_class(node, "mzl_position--bottom"));
    }
}
