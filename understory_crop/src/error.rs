// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::boxed::Box;
use core::fmt;

/// Underlying cause of an image resource failure, as reported by the host's
/// loader.
pub type LoadCause = Box<dyn core::error::Error + Send + Sync + 'static>;

/// The image resource for `locator` could not be fetched or decoded.
///
/// The controller keeps its previous frame when this is returned; hosts use
/// it only for logging and diagnostics.
#[derive(Debug, thiserror::Error)]
#[error("failed to load image resource {locator:?}")]
pub struct ResourceLoadError<S: fmt::Debug> {
    /// The source locator that was being loaded.
    pub locator: S,
    /// What the loader reported.
    #[source]
    pub cause: LoadCause,
}
