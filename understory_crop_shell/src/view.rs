// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render descriptions: what the host should paint for the container and the
//! image, with inline CSS helpers.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Size};

/// ARIA role of the crop container.
pub const CONTAINER_ROLE: &str = "application";

/// Background painted behind the image before it loads.
pub const CONTAINER_BACKGROUND: &str = "#f0f0f0";

/// Duration of the eased transition applied to non-drag moves.
pub const SETTLE_TRANSITION_MILLIS: u32 = 100;

/// Pointer cursor over the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Not editable.
    Default,
    /// Editable, idle.
    Grab,
    /// Editable, dragging.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Animation hint for image position changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Apply immediately; used while dragging so the image tracks the pointer.
    None,
    /// Ease into the new position.
    Eased {
        /// Duration in milliseconds.
        millis: u32,
    },
}

impl Transition {
    /// CSS `transition` value.
    #[must_use]
    pub fn as_css(self) -> String {
        match self {
            Self::None => String::from("none"),
            Self::Eased { millis } => {
                format!("transform {}s ease", f64::from(millis) / 1000.0)
            }
        }
    }
}

/// The clipping container.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerView {
    /// Viewport size.
    pub size: Size,
    /// ARIA role, always [`CONTAINER_ROLE`].
    pub role: &'static str,
    /// `aria-label`.
    pub aria_label: String,
    /// `aria-description`.
    pub aria_description: String,
    /// `0` when editing so the container can take keyboard focus, `-1`
    /// otherwise.
    pub tab_index: i32,
    /// Pointer cursor.
    pub cursor: Cursor,
}

impl ContainerView {
    /// Inline style for the container element.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "width: {}px; height: {}px; overflow: hidden; position: relative; \
             background-color: {CONTAINER_BACKGROUND}; cursor: {}; outline: none;",
            self.size.width,
            self.size.height,
            self.cursor.as_css(),
        )
    }
}

/// The positioned image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageView {
    /// Rendered size.
    pub size: Size,
    /// Translation of the image origin from the container origin.
    pub translate: Point,
    /// Animation hint.
    pub transition: Transition,
    /// Whether the image receives pointer events.
    pub pointer_events: bool,
    /// Alternative text.
    pub alt: String,
}

impl ImageView {
    /// Native image dragging is always disabled.
    pub const DRAGGABLE: bool = false;

    /// CSS `transform` value.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0)",
            self.translate.x, self.translate.y
        )
    }

    /// Inline style for the image element.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "width: {}px; height: {}px; position: absolute; left: 0; top: 0; \
             transform: {}; transition: {}; user-select: none; object-fit: fill; \
             pointer-events: {}; touch-action: none;",
            self.size.width,
            self.size.height,
            self.transform_css(),
            self.transition.as_css(),
            if self.pointer_events { "auto" } else { "none" },
        )
    }
}

/// Everything the host needs to paint one crop view.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellView {
    /// Container description.
    pub container: ContainerView,
    /// Image description; `None` until the image has been sized.
    pub image: Option<ImageView>,
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use kurbo::{Point, Size};

    use super::{Cursor, ImageView, Transition};

    #[test]
    fn transition_css() {
        assert_eq!(Transition::None.as_css(), "none");
        assert_eq!(
            Transition::Eased { millis: 100 }.as_css(),
            "transform 0.1s ease"
        );
    }

    #[test]
    fn cursor_keywords() {
        assert_eq!(Cursor::Default.as_css(), "default");
        assert_eq!(Cursor::Grab.as_css(), "grab");
        assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
    }

    #[test]
    fn image_css_translates_and_gates_pointer_events() {
        let image = ImageView {
            size: Size::new(800.0, 1600.0),
            translate: Point::new(0.0, -600.0),
            transition: Transition::None,
            pointer_events: false,
            alt: String::from("x"),
        };
        assert_eq!(image.transform_css(), "translate3d(0px, -600px, 0)");
        let css = image.css();
        assert!(css.contains("width: 800px; height: 1600px;"), "{css}");
        assert!(css.contains("pointer-events: none;"), "{css}");
        assert!(css.contains("transition: none;"), "{css}");
    }
}
