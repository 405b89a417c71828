// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage clamp: restrict an image offset so the viewport never shows
//! background.
//!
//! For each constrained axis the offset is restricted to
//! `[viewport - size, 0]`. The leading image edge never moves past the
//! viewport origin and the trailing edge never recedes inside the far edge.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_crop::{clamp_position, PanAxes};
//!
//! let size = Size::new(800.0, 1600.0);
//! let viewport = Size::new(800.0, 400.0);
//! let p = clamp_position(Point::new(30.0, -5000.0), size, viewport, PanAxes::Both);
//! assert_eq!(p, Point::new(0.0, -1200.0));
//! ```

use kurbo::{Point, Size};

use crate::config::PanAxes;

/// Clamps a single axis offset into `[viewport - size, 0]`.
///
/// When the image is smaller than the viewport the interval is empty and the
/// result is `0.0`.
#[must_use]
pub fn clamp_axis(proposed: f64, size: f64, viewport: f64) -> f64 {
    let (min, max) = offset_range(size, viewport);
    max.min(min.max(proposed))
}

/// Returns the `(min, max)` offsets allowed along one axis.
#[must_use]
pub fn offset_range(size: f64, viewport: f64) -> (f64, f64) {
    (viewport - size, 0.0)
}

/// Clamps `proposed` so the image of `size` covers `viewport` on every axis
/// that `axes` marks as interactive.
///
/// Axes that are not interactive are passed through unchanged.
#[must_use]
pub fn clamp_position(proposed: Point, size: Size, viewport: Size, axes: PanAxes) -> Point {
    let x = if axes.pans_x() {
        clamp_axis(proposed.x, size.width, viewport.width)
    } else {
        proposed.x
    };
    let y = if axes.pans_y() {
        clamp_axis(proposed.y, size.height, viewport.height)
    } else {
        proposed.y
    };
    Point::new(x, y)
}
