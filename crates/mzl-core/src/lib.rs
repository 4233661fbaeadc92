//! # mzl Core
//!
//! Tooltip overlay logic for the mzl UI widgets, independent of any browser
//! binding.
//!
//! ## Architecture
//!
//! ```text
//! mzl-core/src/
//! ├── dom/          # Document seam + in-memory document
//! ├── overlay.rs    # Shared overlay container (ensure_container)
//! ├── position/     # Pure placement math + viewport fitting
//! ├── popup.rs      # Popup renderer over the document seam
//! ├── timer/        # Scheduler seam: virtual clock, tokio
//! ├── trigger/      # Hover state machine driving a popup
//! ├── button.rs     # Button class/style derivation
//! └── logging.rs    # tracing-subscriber setup for native hosts (feature `tokio`)
//! ```
//!
//! A host supplies a [`dom::Document`] and a [`timer::Scheduler`]; the
//! Leptos crate provides the browser ones.

pub mod button;
pub mod dom;
#[cfg(feature = "tokio")]
pub mod logging;
pub mod overlay;
pub mod popup;
pub mod position;
pub mod timer;
pub mod trigger;

pub use button::ButtonAppearance;
pub use overlay::{ensure_container, OverlayContainer, CONTAINER_CLASS};
pub use popup::{DomPopup, PopupRenderer, TooltipInstance, OPEN_CLASS, POPUP_CLASS};
pub use position::{compute_position, compute_position_with_gap, fit_to_viewport};
pub use trigger::{OpenChangeCallback, SharedTrigger, TriggerController, TriggerState};
