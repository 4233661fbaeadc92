//! Typed error definitions for the mzl widgets.
//!
//! None of these errors reach the user: the widgets log them and degrade.
//! They exist so host-facing seams (document backends, configuration
//! loading) report failures as values instead of panicking.

mod config;
mod dom;

pub use config::ConfigError;
pub use dom::DomError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum UiError {
    /// Wraps a host document failure
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using UiError.
pub type Result<T> = std::result::Result<T, UiError>;
