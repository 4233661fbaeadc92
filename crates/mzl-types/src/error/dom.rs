//! Host document errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by a document backend.
///
/// Removing or looking up a node that is already gone is not an error;
/// backends report that as `false`/`None`.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DomError {
    /// The document has no body to attach the overlay container to
    #[error("Document has no body")]
    MissingBody,

    /// The host refused to create an element
    #[error("Failed to create <{tag}> element")]
    CreateElement {
        /// Tag name that was requested
        tag: String,
    },

    /// Any other host operation failed
    #[error("DOM operation '{operation}' failed: {message}")]
    Operation {
        /// Name of the failed operation
        operation: String,
        /// Message reported by the host
        message: String,
    },
}

impl DomError {
    /// Build an operation error from the host's message.
    pub fn operation(operation: &str, message: impl Into<String>) -> Self {
        Self::Operation { operation: operation.to_string(), message: message.into() }
    }
}
