//! Button appearance: class list, inline style, and element choice.
//!
//! The button itself is stateless; this is the part worth testing without a
//! browser.

use mzl_types::{ButtonKind, ButtonSize};

/// Presentation inputs of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonAppearance {
    pub kind: ButtonKind,
    pub size: ButtonSize,
    pub disabled: bool,
    pub circle: bool,
}

impl ButtonAppearance {
    /// Space-separated class list. `extra` is the caller's class.
    pub fn classes(&self, extra: &str) -> String {
        let is_link = self.kind == ButtonKind::Link;
        let mut classes = vec!["btn".to_string()];
        if !extra.trim().is_empty() {
            classes.push(extra.trim().to_string());
        }
        classes.push(format!("btn-{}", self.kind));
        classes.push(format!("btn-{}", self.size));
        if is_link && self.disabled {
            classes.push("disabled".to_string());
        }
        if !is_link && self.circle {
            classes.push("circle".to_string());
        }
        classes.join(" ")
    }

    /// Inline style from the shared color, followed by the caller's style so
    /// the caller wins on conflicts.
    pub fn style(&self, color: &str, extra: &str) -> String {
        let base = if self.kind == ButtonKind::Link {
            format!("color: {color};")
        } else {
            format!("background-color: {color}; border-color: {color};")
        };
        let extra = extra.trim();
        if extra.is_empty() { base } else { format!("{base} {extra}") }
    }

    /// Links with a target render as `<a>`; everything else is a `<button>`.
    pub fn renders_anchor(&self, href: Option<&str>) -> bool {
        self.kind == ButtonKind::Link && href.is_some_and(|h| !h.is_empty())
    }
}
