// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless integer range slider.
//!
//! A slider is a handle on a horizontal track. This crate owns the part with
//! actual rules in it:
//!
//! - [`geometry`]: pure conversions between pixel offsets and step values,
//!   with a single clamping choke point.
//! - [`Slider`]: the interaction state machine that turns mouse drags, touch
//!   drags, track clicks and arrow keys into one handle position, and reports
//!   committed values through a change callback.
//! - [`listeners`]: scoped registration of the document-level listeners a
//!   drag or a focused handle needs.
//! - [`device`]: one-shot touch capability detection.
//!
//! Rendering is left to the embedder. [`Slider::snapshot`] hands over the
//! handle offset, the live value, tooltip visibility, the "animate this move"
//! flag and tick positions; draw them however you like.
//!
//! ## Driving a slider
//!
//! Pointer and keyboard input are [`ui_events`] events; a host that already
//! translates platform input into them passes them straight through.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use dpi::PhysicalPosition;
//! use kurbo::Rect;
//! use ui_events::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};
//! use ui_events::pointer::{
//!     PointerButton, PointerButtonEvent, PointerEvent, PointerInfo, PointerState, PointerType,
//!     PointerUpdate,
//! };
//! use understory_slider::{Slider, SliderConfig, SliderEvent, StaticProbe};
//!
//! let mouse = PointerInfo {
//!     pointer_id: None,
//!     persistent_device_id: None,
//!     pointer_type: PointerType::Mouse,
//! };
//! let at = |x: f64| PointerState {
//!     position: PhysicalPosition::new(x, 20.0),
//!     scale_factor: 1.0,
//!     ..Default::default()
//! };
//! let button = |x: f64| PointerButtonEvent {
//!     button: Some(PointerButton::Primary),
//!     pointer: mouse.clone(),
//!     state: at(x),
//! };
//!
//! let container = Rect::new(0.0, 0.0, 280.0, 40.0);
//! let committed = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&committed);
//!
//! let mut slider = Slider::mount(
//!     SliderConfig::new(2, 30).with_value(10),
//!     &StaticProbe(false),
//!     &container,
//! )
//! .with_on_change(move |v| sink.set(Some(v)));
//!
//! // Keyboard: focus binds the key listener, each arrow commits at once.
//! slider.on_event(0, SliderEvent::Focus, &container);
//! let arrow = KeyboardEvent {
//!     key: Key::Named(NamedKey::ArrowRight),
//!     state: KeyState::Down,
//!     ..Default::default()
//! };
//! slider.on_event(1, arrow, &container);
//! assert_eq!(committed.get(), Some(11));
//!
//! // Mouse: press on the handle, drag far past the end, release.
//! let handle_x = slider.drag_x() + 17.0;
//! slider.on_event(2, PointerEvent::Down(button(handle_x)), &container);
//! let far = PointerUpdate {
//!     pointer: mouse.clone(),
//!     current: at(handle_x + 1_000.0),
//!     coalesced: Vec::new(),
//!     predicted: Vec::new(),
//! };
//! slider.on_event(3, PointerEvent::Move(far), &container);
//! assert_eq!(slider.snapshot().value, 30);
//! assert_eq!(committed.get(), Some(11)); // not committed until release
//! slider.on_event(4, PointerEvent::Up(button(handle_x + 1_000.0)), &container);
//! assert_eq!(committed.get(), Some(30));
//!
//! let teardown = slider.unmount();
//! assert_eq!(teardown.cancelled_timers, 0);
//! ```
//!
//! ## Time
//!
//! Track clicks commit after a short quiet period and resizes are debounced.
//! The slider never reads a clock: every event carries the host's current time
//! in milliseconds, [`Slider::next_deadline`] says when deferred work is due,
//! and [`Slider::advance`] runs it. The queue itself lives in
//! `understory_timing`.
//!
//! ## Degenerate configurations
//!
//! Nothing is validated on mount. An empty range (`min >= max`) or a track
//! narrower than its handle yields a slider that accepts input without
//! moving and always reports `min`. [`SliderConfig::validate`] reports such
//! configurations for embedders that prefer to reject them.
//!
//! ## Logging
//!
//! State transitions are reported through `tracing` at `debug` level, and
//! per-move updates at `trace` level. Nothing is emitted unless the embedder
//! installs a subscriber.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
pub mod device;
mod event;
pub mod geometry;
pub mod listeners;
mod slider;
mod snapshot;

pub use config::{ConfigError, DEFAULT_HEIGHT, Palette, SliderConfig};
pub use device::{DeviceProbe, StaticProbe, TouchSupport};
pub use event::{EventResponse, InteractionMode, LayoutMeasure, SliderEvent};
pub use geometry::Track;
pub use listeners::{GlobalListeners, ListenerKinds, Subscription};
pub use slider::{
    ChangeCallback, RESIZE_DEBOUNCE_MS, Slider, SliderTimer, TAP_COMMIT_DELAY_MS, Teardown,
};
pub use snapshot::SliderSnapshot;
