//! # mzl Types
//!
//! Geometry, configuration, and error definitions for the mzl UI widgets.
//!
//! This crate provides the foundational type system shared by the widget crates:
//!
//! - **`error`** - Typed error hierarchy for DOM and configuration failures
//! - **`models`** - Geometry (boxes, sizes, positions), alignment, button enums, configuration
//!
//! ## Architecture Role
//!
//! `mzl-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        mzl-types (this crate)
//!              │
//!              ▼
//!          mzl-core
//!              │
//!              ▼
//!         mzl-leptos
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for configuration files and props
//! - **Clone** (most are `Copy`) for cheap hand-off between components
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, DomError, Result, UiError};

// Re-export core model types
pub use models::{
    Alignment, BoundingBox, ButtonKind, ButtonSize, CrossAlign, Position, Side, Size, TooltipConfig,
    UiConfig,
};
