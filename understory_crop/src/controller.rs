// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crop controller: owned positioning state plus the interaction state machine.
//!
//! [`CropController`] ties together the sizing engine, the coverage clamp and
//! a [`DragSession`]. Hosts feed it three kinds of input:
//!
//! - Lifecycle: [`CropController::set_source`] hands out a [`LoadTicket`];
//!   the host loads the image and reports back through
//!   [`CropController::complete_load`] (or the two convenience hooks).
//! - Parameters: viewport size, zoom, and the editing flag.
//! - Interaction: gesture start/move/end, pointer leave, and key presses.
//!
//! Every interaction entry point returns an [`EventOutcome`] that says
//! whether the host should suppress the platform's default action and
//! whether the image moved.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_crop::{CropConfig, CropController, GestureKind, Key, LoadOutcome};
//!
//! let mut crop = CropController::new(CropConfig::free_pan(), Size::new(800.0, 400.0));
//! crop.set_editing(true);
//!
//! let ticket = crop.set_source("photo.jpg").unwrap();
//! let outcome = crop
//!     .on_image_resource_resolved(ticket, Size::new(100.0, 200.0))
//!     .unwrap();
//! assert!(matches!(outcome, LoadOutcome::Applied(_)));
//! assert_eq!(crop.position(), Point::new(0.0, -600.0));
//!
//! // Drag the image down by 50.
//! crop.on_gesture_start(GestureKind::Pointer, Point::new(10.0, 10.0));
//! crop.on_gesture_move(GestureKind::Pointer, Point::new(10.0, 60.0));
//! crop.on_gesture_end();
//! assert_eq!(crop.position(), Point::new(0.0, -550.0));
//!
//! // Arrow keys nudge by the configured step.
//! let outcome = crop.on_key(Key::ArrowUp);
//! assert!(outcome.prevent_default);
//! assert_eq!(crop.position(), Point::new(0.0, -570.0));
//! ```

use core::fmt;

use kurbo::{Point, Size};

use crate::clamp::clamp_position;
use crate::config::CropConfig;
use crate::drag::DragSession;
use crate::error::{LoadCause, ResourceLoadError};
use crate::key::Key;
use crate::layout::{Layout, compute_layout};

/// Identifies one image load request.
///
/// Completions must present the ticket returned by
/// [`CropController::set_source`]; older tickets are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Raw ticket number, increasing with every new source.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Progress of the current image resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No source has been set.
    #[default]
    Empty,
    /// Waiting for the host to complete the given load.
    Pending(LoadTicket),
    /// The natural size is known.
    Ready,
    /// The last load failed; the previous frame is kept.
    Failed,
}

/// Result of a successfully delivered load completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadOutcome {
    /// A new layout was computed and the position reset to center.
    Applied(Layout),
    /// The ticket does not match the pending load; nothing changed.
    Stale,
    /// The natural size cannot cover the viewport; nothing changed.
    Degenerate,
}

/// Whether a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No drag.
    #[default]
    Idle,
    /// A drag session is active.
    Dragging,
}

/// Input device that produced a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Mouse or pen.
    Pointer,
    /// Single-finger touch.
    Touch,
}

/// What the host should do after delivering an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Suppress the platform default action (text selection, native image
    /// drag, page scroll).
    pub prevent_default: bool,
    /// The image position changed.
    pub moved: bool,
}

impl EventOutcome {
    /// The event was not handled; let the default action proceed.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        moved: false,
    };

    fn consumed(moved: bool) -> Self {
        Self {
            prevent_default: true,
            moved,
        }
    }
}

/// Size and offset of the image, ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropFrame {
    /// Rendered image size.
    pub size: Size,
    /// Offset of the image origin relative to the viewport origin.
    pub position: Point,
}

/// Interactive positioning state for one image inside one viewport.
///
/// `S` is the host's opaque source locator (a URL, a path, an asset id). It
/// is only compared for identity and echoed back in errors.
#[derive(Clone, Debug)]
pub struct CropController<S> {
    config: CropConfig,
    viewport: Size,
    zoom: f64,
    editing: bool,
    source: Option<S>,
    load_state: LoadState,
    next_ticket: u64,
    natural: Option<Size>,
    layout: Option<Layout>,
    position: Point,
    drag: DragSession,
}

impl<S: Clone + PartialEq + fmt::Debug> CropController<S> {
    /// Creates a controller for a viewport of the given size.
    ///
    /// Editing starts disabled and zoom starts at the configured minimum.
    #[must_use]
    pub fn new(config: CropConfig, viewport: Size) -> Self {
        Self {
            config,
            viewport,
            zoom: config.clamp_zoom(config.min_zoom),
            editing: false,
            source: None,
            load_state: LoadState::Empty,
            next_ticket: 0,
            natural: None,
            layout: None,
            position: Point::ZERO,
            drag: DragSession::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns `true` if interaction events are acted upon.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns the current source locator, if any.
    #[must_use]
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Returns the progress of the current image load.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Returns the interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        if self.drag.is_active() {
            InteractionState::Dragging
        } else {
            InteractionState::Idle
        }
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns the current image offset.
    ///
    /// This is the origin until the first successful load.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the rendered image size, or zero before the first load.
    #[must_use]
    pub fn rendered_size(&self) -> Size {
        self.layout.map_or(Size::ZERO, |layout| layout.size)
    }

    /// Returns the current layout, if an image has been sized.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    /// Returns what to paint, if an image has been sized.
    #[must_use]
    pub fn frame(&self) -> Option<CropFrame> {
        self.layout.map(|layout| CropFrame {
            size: layout.size,
            position: self.position,
        })
    }

    /// Enables or disables interaction.
    ///
    /// Disabling ends any active drag.
    pub fn set_editing(&mut self, editing: bool) {
        if self.editing == editing {
            return;
        }
        self.editing = editing;
        if !editing && self.drag.end() {
            log::debug!("drag cancelled: editing disabled");
        }
    }

    /// Sets the viewport size and recomputes the layout.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout();
    }

    /// Sets the zoom factor, clamping it into the configured range.
    ///
    /// Zoom only affects sizing for policies that support it, but the value
    /// is stored regardless.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = self.config.clamp_zoom(zoom);
        if !zoom.is_finite() || zoom < 1.0 {
            log::warn!("unsupported zoom {zoom}, using {clamped}");
        } else if clamped != zoom {
            log::debug!("zoom {zoom} limited to {clamped}");
        }
        if self.zoom == clamped {
            return;
        }
        self.zoom = clamped;
        if self.config.fit_policy.supports_zoom() {
            self.relayout();
        }
    }

    /// Sets the image source.
    ///
    /// Returns a ticket for the host's loader, or `None` if `source` is the
    /// current source. The previous frame stays visible until the new load
    /// completes.
    pub fn set_source(&mut self, source: S) -> Option<LoadTicket> {
        if self.source.as_ref() == Some(&source) {
            return None;
        }
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        log::debug!("loading {source:?} as ticket {}", ticket.0);
        self.source = Some(source);
        self.natural = None;
        self.load_state = LoadState::Pending(ticket);
        Some(ticket)
    }

    /// Delivers the result of a load started by [`CropController::set_source`].
    ///
    /// On success the layout is recomputed, the position reset to center and
    /// any drag cancelled. On failure nothing but the load state changes and
    /// the error is handed back for host-side diagnostics.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Size, LoadCause>,
    ) -> Result<LoadOutcome, ResourceLoadError<S>> {
        if self.load_state != LoadState::Pending(ticket) {
            log::debug!("ignoring stale completion for ticket {}", ticket.0);
            return Ok(LoadOutcome::Stale);
        }
        let Some(locator) = self.source.clone() else {
            return Ok(LoadOutcome::Stale);
        };
        match result {
            Ok(natural) => {
                self.natural = Some(natural);
                self.load_state = LoadState::Ready;
                Ok(match self.relayout() {
                    Some(layout) => LoadOutcome::Applied(layout),
                    None => LoadOutcome::Degenerate,
                })
            }
            Err(cause) => {
                self.load_state = LoadState::Failed;
                log::error!("failed to load image {locator:?}: {cause}");
                Err(ResourceLoadError { locator, cause })
            }
        }
    }

    /// Reports that the image resolved with the given natural size.
    pub fn on_image_resource_resolved(
        &mut self,
        ticket: LoadTicket,
        natural: Size,
    ) -> Result<LoadOutcome, ResourceLoadError<S>> {
        self.complete_load(ticket, Ok(natural))
    }

    /// Reports that the image could not be loaded.
    pub fn on_image_resource_failed(
        &mut self,
        ticket: LoadTicket,
        cause: LoadCause,
    ) -> Result<LoadOutcome, ResourceLoadError<S>> {
        self.complete_load(ticket, Err(cause))
    }

    /// Handles pointer-down or touch-start at `at` (viewport coordinates).
    ///
    /// A second start while already dragging keeps the original anchor.
    pub fn on_gesture_start(&mut self, kind: GestureKind, at: Point) -> EventOutcome {
        if !self.editing {
            return EventOutcome::IGNORED;
        }
        if !self.drag.is_active() {
            self.drag.begin(at, self.position);
            log::debug!("{kind:?} drag started at {at:?}");
        }
        EventOutcome::consumed(false)
    }

    /// Handles pointer-move or touch-move at `at`.
    pub fn on_gesture_move(&mut self, kind: GestureKind, at: Point) -> EventOutcome {
        if !self.editing {
            return EventOutcome::IGNORED;
        }
        let Some(proposed) = self.drag.propose(at) else {
            return EventOutcome::IGNORED;
        };
        let moved = self.commit(proposed);
        EventOutcome {
            // Touch moves would otherwise scroll the page.
            prevent_default: kind == GestureKind::Touch,
            moved,
        }
    }

    /// Handles pointer-up or touch-end.
    pub fn on_gesture_end(&mut self) -> EventOutcome {
        if self.drag.end() {
            log::debug!("drag ended at {:?}", self.position);
        }
        EventOutcome::IGNORED
    }

    /// Handles the pointer leaving the viewport; ends any drag.
    pub fn on_pointer_leave(&mut self) -> EventOutcome {
        self.on_gesture_end()
    }

    /// Handles a key press.
    ///
    /// Arrow keys along an interactive axis nudge the image by the configured
    /// step. Other keys are ignored and their default action is preserved. A
    /// drag in progress keeps its anchor.
    pub fn on_key(&mut self, key: Key) -> EventOutcome {
        if !self.editing {
            return EventOutcome::IGNORED;
        }
        let Some(direction) = key.direction(self.config.axes) else {
            return EventOutcome::IGNORED;
        };
        let moved = self.commit(self.position + direction * self.config.key_step);
        EventOutcome::consumed(moved)
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CropControllerDebugInfo {
        CropControllerDebugInfo {
            viewport: self.viewport,
            natural_size: self.natural,
            rendered_size: self.rendered_size(),
            position: self.position,
            zoom: self.zoom,
            editing: self.editing,
            state: self.state(),
            load_state: self.load_state,
            config: self.config,
        }
    }

    /// Clamps `proposed` and stores it. Returns `true` if the position changed.
    fn commit(&mut self, proposed: Point) -> bool {
        if !viewport_is_usable(self.viewport) {
            return false;
        }
        let proposed = if self.config.axes.pans_x() {
            proposed
        } else {
            Point::new(self.position.x, proposed.y)
        };
        let next = clamp_position(
            proposed,
            self.rendered_size(),
            self.viewport,
            self.config.axes,
        );
        if !next.is_finite() || next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// Re-runs the sizing engine from the stored natural size.
    ///
    /// A successful recompute resets the position to center and cancels any
    /// drag. A degenerate one keeps the previous layout and position.
    fn relayout(&mut self) -> Option<Layout> {
        let natural = self.natural?;
        let Some(layout) =
            compute_layout(natural, self.viewport, self.config.fit_policy, self.zoom)
        else {
            log::warn!(
                "cannot cover viewport {:?} with image of size {natural:?}",
                self.viewport
            );
            return None;
        };
        log::debug!(
            "layout {:?} at {:?} for viewport {:?}",
            layout.size,
            layout.initial_position,
            self.viewport
        );
        self.layout = Some(layout);
        self.position = layout.initial_position;
        if self.drag.end() {
            log::debug!("drag cancelled by relayout");
        }
        Some(layout)
    }
}

/// Debug snapshot of a [`CropController`] state.
#[derive(Clone, Copy, Debug)]
pub struct CropControllerDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Natural image size, once known.
    pub natural_size: Option<Size>,
    /// Rendered image size (zero before the first load).
    pub rendered_size: Size,
    /// Current image offset.
    pub position: Point,
    /// Current zoom factor.
    pub zoom: f64,
    /// Whether interaction is enabled.
    pub editing: bool,
    /// Drag state.
    pub state: InteractionState,
    /// Image load progress.
    pub load_state: LoadState,
    /// Active configuration.
    pub config: CropConfig,
}

fn viewport_is_usable(viewport: Size) -> bool {
    viewport.is_finite() && viewport.width > 0.0 && viewport.height > 0.0
}
