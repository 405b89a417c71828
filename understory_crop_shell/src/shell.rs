// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`CropShell`]: a controller plus the props needed to describe it.

use alloc::string::String;
use core::fmt;

use kurbo::Size;
use understory_crop::{
    CropConfig, CropController, EventOutcome, GestureKind, Key, LoadCause, LoadOutcome,
    LoadTicket, PanAxes, ResourceLoadError,
};

use crate::event::RawEvent;
use crate::view::{
    CONTAINER_ROLE, ContainerView, Cursor, ImageView, SETTLE_TRANSITION_MILLIS, ShellView,
    Transition,
};

/// Text props supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellProps {
    /// Image alternative text.
    pub alt: String,
    /// Container `aria-label`.
    pub label: String,
    /// Container `aria-description`.
    pub description: String,
}

impl ShellProps {
    /// Default props, with a description matching the keys `axes` accepts.
    #[must_use]
    pub fn for_axes(axes: PanAxes) -> Self {
        let description = match axes {
            PanAxes::Both => "Use Arrow keys to adjust image position.",
            PanAxes::VerticalOnly => "Use Up and Down arrow keys to adjust image position.",
        };
        Self {
            alt: String::from("Croppable image"),
            label: String::from("Image Cropper"),
            description: String::from(description),
        }
    }
}

impl Default for ShellProps {
    fn default() -> Self {
        Self::for_axes(PanAxes::Both)
    }
}

/// A load the host must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest<S> {
    /// Present this with the result.
    pub ticket: LoadTicket,
    /// What to load.
    pub locator: S,
}

/// Presentation shell around a [`CropController`].
///
/// The shell maps toolkit events onto the controller and derives a
/// [`ShellView`] from its state. It never writes the image position itself.
#[derive(Clone, Debug)]
pub struct CropShell<S> {
    controller: CropController<S>,
    props: ShellProps,
}

impl<S: Clone + PartialEq + fmt::Debug> CropShell<S> {
    /// Creates a shell with default props for `config`.
    #[must_use]
    pub fn new(config: CropConfig, viewport: Size) -> Self {
        Self::with_props(config, viewport, ShellProps::for_axes(config.axes))
    }

    /// Creates a shell with explicit props.
    #[must_use]
    pub fn with_props(config: CropConfig, viewport: Size, props: ShellProps) -> Self {
        Self {
            controller: CropController::new(config, viewport),
            props,
        }
    }

    /// The wrapped controller.
    #[must_use]
    pub fn controller(&self) -> &CropController<S> {
        &self.controller
    }

    /// Mutable access to the wrapped controller, for viewport, zoom and
    /// editing changes.
    pub fn controller_mut(&mut self) -> &mut CropController<S> {
        &mut self.controller
    }

    /// Current props.
    #[must_use]
    pub fn props(&self) -> &ShellProps {
        &self.props
    }

    /// Replaces the props.
    pub fn set_props(&mut self, props: ShellProps) {
        self.props = props;
    }

    /// Sets the image source, returning the load the host has to start.
    pub fn set_source(&mut self, locator: S) -> Option<LoadRequest<S>> {
        let ticket = self.controller.set_source(locator.clone())?;
        Some(LoadRequest { ticket, locator })
    }

    /// Forwards a load completion to the controller.
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        result: Result<Size, LoadCause>,
    ) -> Result<LoadOutcome, ResourceLoadError<S>> {
        let outcome = self.controller.complete_load(ticket, result);
        if let Ok(outcome) = &outcome {
            log::debug!("ticket {} resolved: {outcome:?}", ticket.get());
        }
        outcome
    }

    /// Routes a toolkit event to the controller.
    ///
    /// Touch events without any touch point are ignored.
    pub fn dispatch(&mut self, event: RawEvent<'_>) -> EventOutcome {
        let crop = &mut self.controller;
        match event {
            RawEvent::MouseDown(at) => crop.on_gesture_start(GestureKind::Pointer, at),
            RawEvent::MouseMove(at) => crop.on_gesture_move(GestureKind::Pointer, at),
            RawEvent::MouseUp | RawEvent::TouchEnd => crop.on_gesture_end(),
            RawEvent::MouseLeave => crop.on_pointer_leave(),
            RawEvent::TouchStart(touches) => match RawEvent::primary_touch(touches) {
                Some(at) => crop.on_gesture_start(GestureKind::Touch, at),
                None => {
                    log::debug!("ignoring touch start without touch points");
                    EventOutcome::IGNORED
                }
            },
            RawEvent::TouchMove(touches) => match RawEvent::primary_touch(touches) {
                Some(at) => crop.on_gesture_move(GestureKind::Touch, at),
                None => {
                    log::debug!("ignoring touch move without touch points");
                    EventOutcome::IGNORED
                }
            },
            RawEvent::KeyDown(identifier) => crop.on_key(Key::from_identifier(identifier)),
        }
    }

    /// Describes what to paint for the current state.
    #[must_use]
    pub fn render(&self) -> ShellView {
        let crop = &self.controller;
        let editing = crop.is_editing();
        let dragging = crop.is_dragging();
        let cursor = match (editing, dragging) {
            (false, _) => Cursor::Default,
            (true, false) => Cursor::Grab,
            (true, true) => Cursor::Grabbing,
        };
        let container = ContainerView {
            size: crop.viewport(),
            role: CONTAINER_ROLE,
            aria_label: self.props.label.clone(),
            aria_description: self.props.description.clone(),
            tab_index: if editing { 0 } else { -1 },
            cursor,
        };
        let image = crop.frame().map(|frame| ImageView {
            size: frame.size,
            translate: frame.position,
            transition: if dragging {
                Transition::None
            } else {
                Transition::Eased {
                    millis: SETTLE_TRANSITION_MILLIS,
                }
            },
            pointer_events: editing,
            alt: self.props.alt.clone(),
        });
        ShellView { container, image }
    }
}
