// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the slider demos.
//!
//! [`Host`] plays the part of a windowing system: it owns the clock and the
//! container rect, delivers events, fires deferred work when its deadline
//! passes, and renders snapshots as a line of text.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use dpi::PhysicalPosition;
use kurbo::{Point, Rect};
use ui_events::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerInfo, PointerState, PointerType,
    PointerUpdate,
};
use understory_slider::{
    EventResponse, Slider, SliderConfig, SliderEvent, SliderSnapshot, StaticProbe,
};
use understory_timing::Millis;

/// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to slider
/// transitions at `debug`.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info,understory_slider=debug") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("info"),
        },
    };
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("tracing subscriber not installed: {err}");
    }
}

/// A scripted host for one slider.
#[derive(Debug)]
pub struct Host {
    slider: Slider,
    container: Rect,
    now: Millis,
    committed: Rc<RefCell<Vec<i64>>>,
}

impl Host {
    /// Mounts a slider in a container `width` pixels wide at x = `left`.
    pub fn mount(config: SliderConfig, touch: bool, left: f64, width: f64) -> Self {
        let container = Rect::new(left, 0.0, left + width, config.height);
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        let slider = Slider::mount(config, &StaticProbe(touch), &container).with_on_change(
            move |value| {
                tracing::info!(value, "onChange");
                sink.borrow_mut().push(value);
            },
        );
        Self {
            slider,
            container,
            now: 0,
            committed,
        }
    }

    /// The mounted slider.
    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    /// Mutable access, for toggling `disabled` mid-session.
    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    /// Values reported through the change callback so far.
    pub fn committed(&self) -> Vec<i64> {
        self.committed.borrow().clone()
    }

    /// Current host time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Delivers `event` at the current time.
    pub fn send(&mut self, event: impl Into<SliderEvent>) -> EventResponse {
        let event = event.into();
        tracing::trace!(?event, "delivering");
        let now = self.now;
        let container = self.container;
        let response = self.slider.on_event(now, event, &container);
        tracing::trace!(?response, "delivered");
        response
    }

    /// Client x at the center of the handle.
    pub fn handle_center(&self) -> f64 {
        let track = self.slider().track();
        self.container.x0 + track.padding + self.slider().drag_x() + track.button_size / 2.0
    }

    /// Point at client `x`, vertically centered on the track.
    pub fn point(&self, x: f64) -> Point {
        Point::new(x, self.container.center().y)
    }

    /// Presses the handle, moves through `xs`, and releases.
    pub fn mouse_drag(&mut self, xs: &[f64]) {
        self.pointer_drag(PointerType::Mouse, self.handle_center(), xs);
    }

    /// Touches at `xs[0]`, slides through the rest, and lifts.
    pub fn touch_drag(&mut self, xs: &[f64]) {
        if let Some((&first, rest)) = xs.split_first() {
            self.pointer_drag(PointerType::Touch, first, rest);
        }
    }

    fn pointer_drag(&mut self, pointer_type: PointerType, start: f64, xs: &[f64]) {
        let down = pointer_button(pointer_type, self.point(start));
        self.send(PointerEvent::Down(down));
        let mut last = start;
        for &x in xs {
            self.tick(16);
            let update = pointer_update(pointer_type, self.point(x));
            self.send(PointerEvent::Move(update));
            last = x;
        }
        let up = pointer_button(pointer_type, self.point(last));
        self.send(PointerEvent::Up(up));
    }

    /// Clicks the track at client `x`.
    pub fn click(&mut self, x: f64) -> EventResponse {
        let position = self.point(x);
        self.send(SliderEvent::Click { position })
    }

    /// Focuses the handle and presses `key` `times` times.
    pub fn press(&mut self, key: NamedKey, times: usize) {
        self.send(SliderEvent::Focus);
        for _ in 0..times {
            self.tick(50);
            self.send(key_down(key));
        }
    }

    /// Changes the container width and reports a resize.
    pub fn resize(&mut self, width: f64) {
        self.container = Rect::new(
            self.container.x0,
            self.container.y0,
            self.container.x0 + width,
            self.container.y1,
        );
        self.send(SliderEvent::Resize);
    }

    /// Advances the clock by `ms`, running deferred work on time.
    pub fn tick(&mut self, ms: Millis) {
        let target = self.now + ms;
        let container = self.container;
        while let Some(deadline) = self.slider().next_deadline() {
            if deadline > target {
                break;
            }
            self.now = self.now.max(deadline);
            let now = self.now;
            self.slider.advance(now, &container);
        }
        self.now = target;
    }

    /// Unmounts the slider, logging what was torn down, and returns every
    /// committed value.
    pub fn unmount(self) -> Vec<i64> {
        let teardown = self.slider.unmount();
        tracing::info!(
            released = ?teardown.released,
            cancelled_timers = teardown.cancelled_timers,
            "unmounted"
        );
        self.committed.take()
    }

    /// Renders the slider as one line of text.
    pub fn render(&self) -> String {
        render_line(&self.slider().snapshot(), 48)
    }
}

fn pointer_info(pointer_type: PointerType) -> PointerInfo {
    PointerInfo {
        pointer_id: None,
        persistent_device_id: None,
        pointer_type,
    }
}

/// Pointer state at logical `point`, with a scale factor of one.
pub fn pointer_state(point: Point) -> PointerState {
    PointerState {
        position: PhysicalPosition::new(point.x, point.y),
        scale_factor: 1.0,
        ..Default::default()
    }
}

/// A primary-button press or release.
pub fn pointer_button(pointer_type: PointerType, point: Point) -> PointerButtonEvent {
    PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: pointer_info(pointer_type),
        state: pointer_state(point),
    }
}

/// A move to `point`.
pub fn pointer_update(pointer_type: PointerType, point: Point) -> PointerUpdate {
    PointerUpdate {
        pointer: pointer_info(pointer_type),
        current: pointer_state(point),
        coalesced: Vec::new(),
        predicted: Vec::new(),
    }
}

/// A key press.
pub fn key_down(key: NamedKey) -> KeyboardEvent {
    KeyboardEvent {
        key: Key::Named(key),
        state: KeyState::Down,
        ..Default::default()
    }
}

/// Draws `snapshot` into `columns` characters: ticks as `'`, the handle as
/// `(value)`, and a `^` when the tooltip is raised.
#[allow(
    clippy::cast_possible_truncation,
    reason = "the fraction is clamped to [0, 1] so the column fits"
)]
pub fn render_line(snapshot: &SliderSnapshot, columns: usize) -> String {
    if columns == 0 {
        return String::new();
    }
    let span = snapshot.max_scroll + snapshot.button_size;
    let column_of = |x: f64| -> usize {
        if span <= 0.0 {
            return 0;
        }
        let fraction = (x / span).clamp(0.0, 1.0);
        ((fraction * (columns.saturating_sub(1)) as f64).round()) as usize
    };

    let mut cells = vec!['-'; columns];
    for tick in snapshot.tick_offsets() {
        cells[column_of(tick)] = '\'';
    }
    let handle = column_of(snapshot.drag_x + snapshot.button_size / 2.0);
    cells[handle] = if snapshot.show_bubble { '^' } else { 'o' };

    let mut line: String = cells.into_iter().collect();
    let _ = write!(
        line,
        " {:>4} {}",
        snapshot.value,
        if snapshot.is_control_by_keyboard {
            "(animated)"
        } else {
            ""
        }
    );
    line
}
