//! Trigger controller state types

use std::fmt;

use crate::timer::TimerKind;

/// Hover lifecycle of one trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    /// Nothing mounted
    #[default]
    Idle,
    /// Popup mounted, waiting out the open delay
    Opening,
    /// Popup visually open
    Open,
    /// Popup visually closed, waiting out the close delay before detaching
    Closing,
}

impl fmt::Display for TriggerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Idle => write!(f, "idle"),
            Self::Opening => write!(f, "opening"),
            Self::Open => write!(f, "open"),
            Self::Closing => write!(f, "closing"),
        }
    }
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TriggerEvent {
    PointerEnter,
    PointerLeave,
    Elapsed(TimerKind),
}

/// A scheduled timer together with the token its fire will carry
#[derive(Debug)]
pub(crate) struct PendingTimer<H> {
    pub handle: H,
    pub token: u64,
}
