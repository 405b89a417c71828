// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop_shell --heading-base-level=0

//! Understory Crop Shell: headless presentation for `understory_crop`.
//!
//! [`CropShell`] wraps a [`CropController`](understory_crop::CropController)
//! and takes care of the parts of a crop widget that are not geometry:
//!
//! - Routing toolkit events ([`RawEvent`]) to gesture and key entry points.
//! - Describing the container and image to paint ([`ShellView`]): sizes,
//!   translation, cursor, transition hint, tab order and ARIA attributes.
//! - Rendering those descriptions as inline CSS for DOM-based hosts.
//!
//! Nothing here draws. Hosts apply the view with whatever toolkit they use.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_crop::CropConfig;
//! use understory_crop_shell::{CropShell, RawEvent};
//!
//! let mut shell = CropShell::new(CropConfig::free_pan(), Size::new(800.0, 400.0));
//! let request = shell.set_source("photo.jpg").unwrap();
//! // ... the host loads `request.locator` and reports its natural size ...
//! shell.resolve(request.ticket, Ok(Size::new(100.0, 200.0))).unwrap();
//!
//! shell.controller_mut().set_editing(true);
//! let outcome = shell.dispatch(RawEvent::KeyDown("ArrowDown"));
//! assert!(outcome.prevent_default);
//!
//! let view = shell.render();
//! let image = view.image.unwrap();
//! assert_eq!(image.translate, Point::new(0.0, -580.0));
//! assert_eq!(image.transform_css(), "translate3d(0px, -580px, 0)");
//! assert_eq!(view.container.tab_index, 0);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod event;
mod shell;
mod view;

pub use event::RawEvent;
pub use shell::{CropShell, LoadRequest, ShellProps};
pub use view::{
    CONTAINER_BACKGROUND, CONTAINER_ROLE, ContainerView, Cursor, ImageView,
    SETTLE_TRANSITION_MILLIS, ShellView, Transition,
};
