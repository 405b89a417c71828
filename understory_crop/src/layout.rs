// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing engine: scale a natural image size against a viewport.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_crop::{compute_layout, FitPolicy};
//!
//! // A portrait image in a landscape viewport is covered along the width and
//! // overflows vertically.
//! let layout = compute_layout(
//!     Size::new(100.0, 200.0),
//!     Size::new(800.0, 400.0),
//!     FitPolicy::FitThenCover,
//!     1.0,
//! )
//! .unwrap();
//! assert_eq!(layout.size, Size::new(800.0, 1600.0));
//! assert_eq!(layout.initial_position, Point::new(0.0, -600.0));
//! ```

use kurbo::{Point, Size};

use crate::config::FitPolicy;

/// Rendered image size together with its centered starting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Rendered image size in view units.
    pub size: Size,
    /// Offset of the image origin from the viewport origin that centers the
    /// image in the viewport.
    pub initial_position: Point,
}

impl Layout {
    /// Returns `true` if the rendered size covers the viewport on both axes.
    #[must_use]
    pub fn covers(&self, viewport: Size) -> bool {
        self.size.width >= viewport.width && self.size.height >= viewport.height
    }
}

/// Computes the rendered size and centered position of an image.
///
/// `zoom` is only applied for [`FitPolicy::FitThenCover`]; callers are
/// expected to pass a factor of at least `1.0`.
///
/// Returns `None` when no coverage is possible: a natural or viewport
/// dimension that is zero, negative or non-finite, or a zoom that is not a
/// positive finite number.
#[must_use]
pub fn compute_layout(
    natural: Size,
    viewport: Size,
    policy: FitPolicy,
    zoom: f64,
) -> Option<Layout> {
    if !is_positive(natural) || !is_positive(viewport) {
        return None;
    }
    let aspect = natural.width / natural.height;
    let (width, height) = match policy {
        FitPolicy::FitThenCover => {
            if !(zoom.is_finite() && zoom > 0.0) {
                return None;
            }
            let (w, h) = fit_then_cover(aspect, viewport);
            (w * zoom, h * zoom)
        }
        FitPolicy::AlwaysCover => always_cover(aspect, viewport),
    };
    let size = Size::new(width, height);
    if !size.is_finite() {
        return None;
    }
    let initial_position = Point::new(
        (viewport.width - size.width) / 2.0,
        (viewport.height - size.height) / 2.0,
    );
    Some(Layout {
        size,
        initial_position,
    })
}

fn fit_then_cover(aspect: f64, viewport: Size) -> (f64, f64) {
    let mut width = viewport.width;
    let mut height = width / aspect;
    if width < viewport.width || height < viewport.height {
        let viewport_aspect = viewport.width / viewport.height;
        if aspect > viewport_aspect {
            height = viewport.height;
            width = viewport.height * aspect;
        } else {
            width = viewport.width;
            height = viewport.width / aspect;
        }
    }
    (width, height)
}

fn always_cover(aspect: f64, viewport: Size) -> (f64, f64) {
    let width = viewport.width;
    let height = width / aspect;
    if height < viewport.height {
        (viewport.height * aspect, viewport.height)
    } else {
        (width, height)
    }
}

fn is_positive(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}
