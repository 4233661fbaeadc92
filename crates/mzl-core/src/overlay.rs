//! Shared overlay container holding every tooltip popup on the page.

use mzl_types::DomError;
use tracing::debug;

use crate::dom::Document;

/// Marker class of the overlay container.
pub const CONTAINER_CLASS: &str = "mzl_position-container";

/// Handle to the page's overlay container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContainer<N> {
    node: N,
}

impl<N> OverlayContainer<N> {
    pub fn node(&self) -> &N {
        &self.node
    }
}

/// Return the document's overlay container, creating it on first use.
///
/// The lookup for [`CONTAINER_CLASS`] guards creation, so every caller on the
/// same document shares one container and the body is mutated at most once.
pub fn ensure_container<D: Document>(document: &D) -> Result<OverlayContainer<D::Node>, DomError> {
    if let Some(node) = document.find_by_class(CONTAINER_CLASS) {
        return Ok(OverlayContainer { node });
    }

    let node = document.create_element(CONTAINER_CLASS)?;
    document.append_to_body(&node)?;
    debug!(class = CONTAINER_CLASS, "Overlay container created");
    Ok(OverlayContainer { node })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    #[test]
    fn test_ensure_container_is_idempotent() {
        let doc = MemoryDocument::new();

        let first = ensure_container(&doc).unwrap();
        let second = ensure_container(&doc).unwrap();

        assert_eq!(first, second);
        assert_eq!(doc.count_by_class(CONTAINER_CLASS), 1);
        assert_eq!(doc.children(doc.body()), vec![*first.node()]);
    }

    #[test]
    fn test_ensure_container_reports_creation_failure() {
        let doc = MemoryDocument::new();
        doc.refuse_element_creation(true);

        let err = ensure_container(&doc).unwrap_err();
        assert!(matches!(err, DomError::CreateElement { .. }));
        assert_eq!(doc.count_by_class(CONTAINER_CLASS), 0);
    }
}
