//! Screen geometry in CSS pixels.

use serde::{Deserialize, Serialize};

/// Bounding box of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Same origin, with negative or non-finite dimensions replaced by zero.
    ///
    /// A non-finite origin collapses to `0.0` as well.
    pub fn sanitized(&self) -> Self {
        Self {
            left: finite_or_zero(self.left),
            top: finite_or_zero(self.top),
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }
}

/// Measured size of a rendered element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    ///
    /// A popup that has not been laid out yet reports zero here.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Top-left corner of a positioned element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
