// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: fit policy, pan axes, and keyboard/zoom parameters.

use kurbo::Size;

/// Default container size used when the host does not supply one.
pub const DEFAULT_VIEWPORT: Size = Size::new(800.0, 400.0);

/// Distance, in view units, moved by a single arrow key press.
pub const DEFAULT_KEY_STEP: f64 = 20.0;

/// How the natural image size is scaled against the viewport.
///
/// Both policies preserve the image aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitPolicy {
    /// Fit to the viewport width, then promote to a cover fit if either axis
    /// falls short. The result is multiplied by the zoom factor.
    #[default]
    FitThenCover,
    /// Always cover the viewport. Zoom is not applied.
    AlwaysCover,
}

impl FitPolicy {
    /// Returns `true` if this policy honors a zoom factor.
    #[must_use]
    pub fn supports_zoom(self) -> bool {
        matches!(self, Self::FitThenCover)
    }
}

/// Which axes of the image position are interactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanAxes {
    /// The image may be repositioned horizontally and vertically.
    #[default]
    Both,
    /// Only the vertical offset is tracked; the image stays horizontally
    /// centered.
    VerticalOnly,
}

impl PanAxes {
    /// Returns `true` if the horizontal offset is interactive.
    #[must_use]
    pub fn pans_x(self) -> bool {
        matches!(self, Self::Both)
    }

    /// Returns `true` if the vertical offset is interactive.
    ///
    /// Every variant pans vertically; this exists for symmetry with
    /// [`PanAxes::pans_x`].
    #[must_use]
    pub fn pans_y(self) -> bool {
        true
    }
}

/// Configuration for a [`CropController`](crate::CropController).
///
/// The two presets correspond to the two component flavors:
/// [`CropConfig::free_pan`] and [`CropConfig::vertical_pan`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropConfig {
    /// Scaling policy.
    pub fit_policy: FitPolicy,
    /// Interactive axes.
    pub axes: PanAxes,
    /// Arrow key step in view units.
    pub key_step: f64,
    /// Smallest accepted zoom factor.
    ///
    /// Values below `1.0` or non-finite values are treated as `1.0`.
    pub min_zoom: f64,
    /// Largest accepted zoom factor; `None` leaves zoom unbounded.
    pub max_zoom: Option<f64>,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self::free_pan()
    }
}

impl CropConfig {
    /// Free panning in both axes with fit-then-cover sizing and zoom.
    #[must_use]
    pub const fn free_pan() -> Self {
        Self {
            fit_policy: FitPolicy::FitThenCover,
            axes: PanAxes::Both,
            key_step: DEFAULT_KEY_STEP,
            min_zoom: 1.0,
            max_zoom: None,
        }
    }

    /// Vertical-only panning with unconditional cover sizing.
    #[must_use]
    pub const fn vertical_pan() -> Self {
        Self {
            fit_policy: FitPolicy::AlwaysCover,
            axes: PanAxes::VerticalOnly,
            key_step: DEFAULT_KEY_STEP,
            min_zoom: 1.0,
            max_zoom: None,
        }
    }

    /// Returns a copy with the given arrow key step.
    #[must_use]
    pub fn with_key_step(mut self, step: f64) -> Self {
        self.key_step = step;
        self
    }

    /// Returns a copy with the given zoom limits.
    ///
    /// A minimum below `1.0` is raised to `1.0`, since smaller factors would
    /// leave the viewport uncovered. A maximum below the minimum collapses
    /// onto it, and an infinite maximum is stored as `None`.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: Option<f64>) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        let (min_zoom, max_zoom) = self.zoom_limits();
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom.is_finite().then_some(max_zoom);
        self
    }

    /// Returns the effective `(min, max)` zoom range.
    ///
    /// The fields are public and may come from deserialized input, so they
    /// are normalized here: the minimum is at least `1.0` and finite, a
    /// missing or NaN maximum is unbounded, and a maximum below the minimum
    /// collapses onto it.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        let min = if self.min_zoom.is_finite() && self.min_zoom >= 1.0 {
            self.min_zoom
        } else {
            1.0
        };
        let max = match self.max_zoom {
            Some(max) if max.is_nan() => f64::INFINITY,
            Some(max) => max.max(min),
            None => f64::INFINITY,
        };
        (min, max)
    }

    /// Clamps a requested zoom factor into the configured range.
    ///
    /// Non-finite input falls back to the minimum.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let (min, max) = self.zoom_limits();
        if !zoom.is_finite() {
            return min;
        }
        zoom.clamp(min, max)
    }
}
