// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop --heading-base-level=0

//! Understory Crop: headless image crop positioning.
//!
//! This crate positions an image inside a fixed-size viewport so that the
//! viewport is always fully covered. It provides:
//! - A sizing engine that scales a natural image size to fit or cover the
//!   viewport, optionally zoomed ([`compute_layout`]).
//! - A coverage clamp that keeps every offset within
//!   `[viewport - size, 0]` on each interactive axis ([`clamp_position`]).
//! - An interaction state machine that turns pointer, touch and arrow-key
//!   input into clamped offsets ([`CropController`]).
//!
//! It does **not** load or paint images. Callers are expected to:
//! - Load the image resource themselves and report its natural size (or the
//!   failure) back with the [`LoadTicket`] they were given.
//! - Forward input events and honor [`EventOutcome::prevent_default`].
//! - Paint the image at [`CropFrame::size`], translated by
//!   [`CropFrame::position`], clipped to the viewport.
//!
//! `understory_crop_shell` builds style and accessibility descriptions on top
//! of this crate.
//!
//! ## Variants
//!
//! One engine covers both component flavors through [`CropConfig`]:
//!
//! - [`CropConfig::free_pan`]: fit to width, promote to cover when needed,
//!   honor zoom, pan along both axes, all four arrow keys.
//! - [`CropConfig::vertical_pan`]: always cover, permanently centered
//!   horizontally, pan along Y only, Up/Down arrows only.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_crop::{CropConfig, CropController, Key};
//!
//! let mut crop = CropController::new(CropConfig::vertical_pan(), Size::new(800.0, 400.0));
//! let ticket = crop.set_source("banner.jpg").unwrap();
//! crop.on_image_resource_resolved(ticket, Size::new(100.0, 200.0)).unwrap();
//!
//! // Nothing moves until editing is enabled.
//! assert!(!crop.on_key(Key::ArrowDown).moved);
//!
//! crop.set_editing(true);
//! for _ in 0..50 {
//!     let _ = crop.on_key(Key::ArrowDown);
//! }
//! assert_eq!(crop.position(), Point::new(0.0, 0.0));
//! ```
//!
//! ## Logging
//!
//! Recomputes, drag transitions and stale completions are reported through
//! the [`log`] facade at `debug` level; degenerate geometry and unsupported
//! zoom at `warn`; resource failures at `error`. Installing a logger is up to
//! the application.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod clamp;
mod config;
mod controller;
pub mod drag;
mod error;
mod key;
mod layout;

pub use clamp::{clamp_axis, clamp_position, offset_range};
pub use config::{CropConfig, DEFAULT_KEY_STEP, DEFAULT_VIEWPORT, FitPolicy, PanAxes};
pub use controller::{
    CropController, CropControllerDebugInfo, CropFrame, EventOutcome, GestureKind,
    InteractionState, LoadOutcome, LoadState, LoadTicket,
};
pub use error::{LoadCause, ResourceLoadError};
pub use key::Key;
pub use layout::{Layout, compute_layout};
