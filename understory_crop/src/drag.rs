// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored drag session: map pointer positions to proposed image offsets.
//!
//! ## Usage
//!
//! 1) Begin a session with [`DragSession::begin`], passing the pointer
//!    position and the image offset at that instant.
//! 2) On each move event, call [`DragSession::propose`] to get the offset that
//!    keeps the grabbed image point under the pointer.
//! 3) End the session with [`DragSession::end`].
//!
//! The anchor is captured once and never recomputed while the session lives.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_crop::drag::DragSession;
//!
//! let mut drag = DragSession::default();
//! drag.begin(Point::new(100.0, 100.0), Point::new(-50.0, -50.0));
//! assert_eq!(drag.anchor(), Some(Vec2::new(150.0, 150.0)));
//!
//! let proposed = drag.propose(Point::new(120.0, 130.0)).unwrap();
//! assert_eq!(proposed, Point::new(-30.0, -20.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the anchor offset of an in-progress drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    anchor: Option<Vec2>,
}

impl DragSession {
    /// Starts a session; the anchor is `pointer - position`.
    pub fn begin(&mut self, pointer: Point, position: Point) {
        self.anchor = Some(pointer - position);
    }

    /// Returns the offset proposed for the pointer at `pointer`.
    ///
    /// Returns `None` if no session is active.
    #[must_use]
    pub fn propose(&self, pointer: Point) -> Option<Point> {
        self.anchor.map(|anchor| pointer - anchor)
    }

    /// Ends the session. Returns `true` if one was active.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// The anchor captured at session start.
    #[must_use]
    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }
}
