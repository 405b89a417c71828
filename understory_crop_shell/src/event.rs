// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by a DOM-like toolkit.

use kurbo::Point;

/// A platform event targeted at the crop container or its image.
///
/// Coordinates are client coordinates; only differences between them matter,
/// so any consistent origin works.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawEvent<'a> {
    /// Mouse button pressed over the image.
    MouseDown(Point),
    /// Mouse moved over the image.
    MouseMove(Point),
    /// Mouse button released.
    MouseUp,
    /// Pointer left the container.
    MouseLeave,
    /// Touch started; the current touch list.
    TouchStart(&'a [Point]),
    /// Touch moved; the current touch list.
    TouchMove(&'a [Point]),
    /// Touch ended.
    TouchEnd,
    /// Key pressed while the container has focus; the `KeyboardEvent.key`
    /// identifier.
    KeyDown(&'a str),
}

impl RawEvent<'_> {
    /// The point that drives a single-touch gesture: the first touch.
    #[must_use]
    pub fn primary_touch(touches: &[Point]) -> Option<Point> {
        touches.first().copied()
    }
}
