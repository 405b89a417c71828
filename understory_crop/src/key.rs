// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard identification for arrow-key nudging.

use core::convert::Infallible;
use core::str::FromStr;

use kurbo::Vec2;

use crate::config::PanAxes;

/// A key press, reduced to what the crop engine cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move the image up.
    ArrowUp,
    /// Move the image down.
    ArrowDown,
    /// Move the image left.
    ArrowLeft,
    /// Move the image right.
    ArrowRight,
    /// Any other key; never handled.
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` style identifier to a [`Key`].
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    /// Unit direction of this key, or `None` if `axes` does not pan along it.
    ///
    /// Positive y points down, matching view space.
    #[must_use]
    pub fn direction(self, axes: PanAxes) -> Option<Vec2> {
        match self {
            Self::ArrowUp if axes.pans_y() => Some(Vec2::new(0.0, -1.0)),
            Self::ArrowDown if axes.pans_y() => Some(Vec2::new(0.0, 1.0)),
            Self::ArrowLeft if axes.pans_x() => Some(Vec2::new(-1.0, 0.0)),
            Self::ArrowRight if axes.pans_x() => Some(Vec2::new(1.0, 0.0)),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_identifier(s))
    }
}
