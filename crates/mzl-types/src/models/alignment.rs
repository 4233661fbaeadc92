//! Tooltip placement relative to its trigger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the trigger the popup is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// True for sides that stack the popup above or below the trigger.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// How the popup lines up with the trigger along the side it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAlign {
    /// Centered on the trigger
    Center,
    /// Leading edges aligned (left edge, or top edge for side placements)
    Start,
    /// Trailing edges aligned (right edge, or bottom edge for side placements)
    End,
}

/// Requested placement of a tooltip popup.
///
/// Unknown strings deserialize to [`Alignment::Top`] rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum Alignment {
    #[default]
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    LeftTop,
    LeftBottom,
    Right,
    RightTop,
    RightBottom,
}

impl Alignment {
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopLeft,
        Self::TopRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::LeftTop,
        Self::LeftBottom,
        Self::Right,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Parse from string, falling back to `Top` for anything unrecognized.
    pub fn from_string(s: &str) -> Self {
        match s {
            "topLeft" => Self::TopLeft,
            "topRight" => Self::TopRight,
            "bottom" => Self::Bottom,
            "bottomLeft" => Self::BottomLeft,
            "bottomRight" => Self::BottomRight,
            "left" => Self::Left,
            "leftTop" => Self::LeftTop,
            "leftBottom" => Self::LeftBottom,
            "right" => Self::Right,
            "rightTop" => Self::RightTop,
            "rightBottom" => Self::RightBottom,
            _ => Self::Top,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    pub fn cross(self) -> CrossAlign {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => CrossAlign::Center,
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => CrossAlign::Start,
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                CrossAlign::End
            },
        }
    }

    /// Rebuild an alignment from its parts.
    pub fn from_parts(side: Side, cross: CrossAlign) -> Self {
        match (side, cross) {
            (Side::Top, CrossAlign::Center) => Self::Top,
            (Side::Top, CrossAlign::Start) => Self::TopLeft,
            (Side::Top, CrossAlign::End) => Self::TopRight,
            (Side::Bottom, CrossAlign::Center) => Self::Bottom,
            (Side::Bottom, CrossAlign::Start) => Self::BottomLeft,
            (Side::Bottom, CrossAlign::End) => Self::BottomRight,
            (Side::Left, CrossAlign::Center) => Self::Left,
            (Side::Left, CrossAlign::Start) => Self::LeftTop,
            (Side::Left, CrossAlign::End) => Self::LeftBottom,
            (Side::Right, CrossAlign::Center) => Self::Right,
            (Side::Right, CrossAlign::Start) => Self::RightTop,
            (Side::Right, CrossAlign::End) => Self::RightBottom,
        }
    }

    /// Same cross alignment on the opposite side of the trigger.
    pub fn flipped(self) -> Self {
        Self::from_parts(self.side().opposite(), self.cross())
    }
}

impl From<String> for Alignment {
    fn from(s: String) -> Self {
        Self::from_string(&s)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Top => write!(f, "top"),
            Self::TopLeft => write!(f, "topLeft"),
            Self::TopRight => write!(f, "topRight"),
            Self::Bottom => write!(f, "bottom"),
            Self::BottomLeft => write!(f, "bottomLeft"),
            Self::BottomRight => write!(f, "bottomRight"),
            Self::Left => write!(f, "left"),
            Self::LeftTop => write!(f, "leftTop"),
            Self::LeftBottom => write!(f, "leftBottom"),
            Self::Right => write!(f, "right"),
            Self::RightTop => write!(f, "rightTop"),
            Self::RightBottom => write!(f, "rightBottom"),
        }
    }
}
