//! Button variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual kind of a button.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Primary,
    #[default]
    Default,
    Danger,
    /// Rendered as text; becomes an anchor when given an `href`
    Link,
    Warning,
    Info,
    Dashed,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Default => "default",
            Self::Danger => "danger",
            Self::Link => "link",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Dashed => "dashed",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Large,
    #[default]
    Middle,
    Small,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Middle => "middle",
            Self::Small => "small",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
