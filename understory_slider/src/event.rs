// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input consumed by [`Slider::on_event`](crate::Slider::on_event).
//!
//! Pointer and keyboard input arrive as [`ui_events`] types. Mouse and pen
//! pointers drag the handle relatively; [`PointerType::Touch`] pointers drag
//! it absolutely. The remaining variants are element-level notifications a
//! host derives itself.

use kurbo::{Point, Rect};
use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};
use ui_events::pointer::{PointerEvent, PointerType};

/// One input event for a slider.
#[derive(Clone, Debug)]
pub enum SliderEvent {
    /// Pointer input: presses on the handle, and document-wide moves and
    /// releases while dragging.
    Pointer(PointerEvent),
    /// Key input while the handle's keyboard listener is bound.
    Keyboard(KeyboardEvent),
    /// Click (or tap) on the track, in client coordinates.
    Click {
        /// Click position.
        position: Point,
    },
    /// The handle gained keyboard focus.
    Focus,
    /// The handle lost keyboard focus.
    Blur,
    /// The window was resized.
    Resize,
}

impl From<PointerEvent> for SliderEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<KeyboardEvent> for SliderEvent {
    fn from(event: KeyboardEvent) -> Self {
        Self::Keyboard(event)
    }
}

/// `+1` for keys that increase the value, `-1` for keys that decrease it.
pub(crate) fn arrow_direction(key: &Key) -> Option<i8> {
    match key {
        Key::Named(NamedKey::ArrowRight | NamedKey::ArrowUp) => Some(1),
        Key::Named(NamedKey::ArrowLeft | NamedKey::ArrowDown) => Some(-1),
        _ => None,
    }
}

/// Touch pointers position the handle absolutely.
pub(crate) fn is_touch(pointer_type: PointerType) -> bool {
    pointer_type == PointerType::Touch
}

/// Which interaction produced the current position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Mouse or pen drag, tracked relatively.
    PointerDrag,
    /// Touch drag, tracked absolutely.
    TouchDrag,
    /// Click on the track; commit is debounced.
    TapToPosition,
    /// Arrow key step; commit is immediate.
    KeyboardStep,
}

/// What the host should do with the raw event after the slider saw it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The slider acted on the event.
    pub handled: bool,
    /// Suppress the platform default (page scroll, caret movement).
    pub prevent_default: bool,
}

impl EventResponse {
    /// The event did not apply.
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };

    /// The event was consumed.
    pub const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };

    /// Returns `self` with `prevent_default` set.
    #[must_use]
    pub fn and_prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }
}

/// Layout measurement collaborator.
pub trait LayoutMeasure {
    /// The slider container's bounds in client coordinates.
    fn container_bounds(&self) -> Rect;
}

impl LayoutMeasure for Rect {
    fn container_bounds(&self) -> Rect {
        *self
    }
}
