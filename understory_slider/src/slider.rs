// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider interaction state machine.
//!
//! ## States
//!
//! - **Idle**: no pointer sequence in progress. Clicks on the track and arrow
//!   keys move the handle without leaving Idle.
//! - **Dragging**: between a mouse press on the handle and its release, or
//!   between touch start and touch end. The drag owns a [`Subscription`] for
//!   its document-wide move/end listeners; every path out of Dragging gives
//!   it back. Arrow keys are ignored while dragging.
//!
//! ## Commits
//!
//! The change callback fires once per finished user action: drag end, arrow
//! key, or a track click after [`TAP_COMMIT_DELAY_MS`] of quiet. Moves and
//! [`Slider::snapshot`] never fire it.

use alloc::boxed::Box;
use core::fmt;
use core::mem;

use kurbo::Point;
use tracing::{debug, trace};
use ui_events::keyboard::KeyboardEvent;
use ui_events::pointer::{PointerButton, PointerEvent};
use understory_timing::{Millis, TimerQueue};

use crate::config::SliderConfig;
use crate::device::{DeviceProbe, TouchSupport};
use crate::event::{self, EventResponse, InteractionMode, LayoutMeasure, SliderEvent};
use crate::geometry::{self, Track};
use crate::listeners::{GlobalListeners, ListenerKinds, Subscription};
use crate::snapshot::SliderSnapshot;

/// Quiet period after a track click before its value is committed.
pub const TAP_COMMIT_DELAY_MS: Millis = 200;

/// Quiet period after the last resize before the track is re-measured.
pub const RESIZE_DEBOUNCE_MS: Millis = 1_000;

/// Deferred work, one pending timer per kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliderTimer {
    /// Commit the position a track click jumped to.
    TapCommit,
    /// Re-measure the track and re-seed the position from the value.
    Resize,
}

/// Receives committed values.
pub type ChangeCallback = Box<dyn FnMut(i64)>;

enum Phase {
    Idle,
    Dragging {
        mode: InteractionMode,
        last_x: f64,
        subscription: Subscription,
    },
}

/// What [`Slider::unmount`] tore down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Teardown {
    /// Listener kinds that were still bound.
    pub released: ListenerKinds,
    /// Pending timers that were dropped without firing.
    pub cancelled_timers: usize,
}

/// A mounted slider.
///
/// Create it with [`Slider::mount`], feed it input through
/// [`Slider::on_event`], call [`Slider::advance`] once the host clock passes
/// [`Slider::next_deadline`], and finish with [`Slider::unmount`].
pub struct Slider {
    config: SliderConfig,
    track: Track,
    drag_x: f64,
    committed: i64,
    phase: Phase,
    mode: Option<InteractionMode>,
    show_bubble: bool,
    keyboard_control: bool,
    suppress_click: bool,
    touch: TouchSupport,
    listeners: GlobalListeners,
    mounted: Option<Subscription>,
    focused: Option<Subscription>,
    timers: TimerQueue<SliderTimer>,
    on_change: ChangeCallback,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("track", &self.track)
            .field("drag_x", &self.drag_x)
            .field("committed", &self.committed)
            .field("dragging", &self.is_dragging())
            .field("mode", &self.mode)
            .field("touch", &self.touch)
            .field("listeners", &self.listeners)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Measures the track, seeds the handle from `config.value`, and binds the
    /// resize listener.
    ///
    /// The probe is consulted here and never again. The initial value is
    /// clamped onto the track but not reported through the callback.
    pub fn mount<P, L>(config: SliderConfig, probe: &P, layout: &L) -> Self
    where
        P: DeviceProbe + ?Sized,
        L: LayoutMeasure + ?Sized,
    {
        let touch = TouchSupport::detect(probe);
        let track = Track::measure(layout.container_bounds(), config.height, config.padding);
        let mut listeners = GlobalListeners::default();
        let mounted = Some(listeners.acquire(ListenerKinds::RESIZE));
        let mut slider = Self {
            config,
            track,
            drag_x: 0.0,
            committed: config.min,
            phase: Phase::Idle,
            mode: None,
            show_bubble: false,
            keyboard_control: false,
            suppress_click: false,
            touch,
            listeners,
            mounted,
            focused: None,
            timers: TimerQueue::new(),
            on_change: Box::new(|_| {}),
        };
        slider.set_drag_x(geometry::offset_from_value(
            config.value,
            config.min,
            config.total_steps(),
            track.max_scroll,
        ));
        slider.committed = slider.derived_value();
        debug!(
            value = slider.committed,
            drag_x = slider.drag_x,
            max_scroll = track.max_scroll,
            touch = touch.is_touch(),
            "slider mounted"
        );
        slider
    }

    /// Installs the change callback. The default does nothing.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(i64) + 'static) -> Self {
        self.on_change = Box::new(on_change);
        self
    }

    /// Handles one input event at host time `now`.
    ///
    /// `layout` is consulted for the container's current left edge when an
    /// event positions the handle absolutely (touch, track click).
    pub fn on_event<E, L>(&mut self, now: Millis, event: E, layout: &L) -> EventResponse
    where
        E: Into<SliderEvent>,
        L: LayoutMeasure + ?Sized,
    {
        // Only the click immediately following a mouse drag's release is
        // swallowed.
        let after_drag_release = mem::take(&mut self.suppress_click);
        let event = event.into();
        match event {
            SliderEvent::Resize => return self.schedule_resize(now),
            SliderEvent::Blur => return self.blur(),
            _ if self.config.disabled => return EventResponse::IGNORED,
            _ => {}
        }
        match event {
            SliderEvent::Pointer(pointer) => self.pointer_event(&pointer, layout),
            SliderEvent::Keyboard(key) => self.key_down(&key),
            SliderEvent::Click { .. } if after_drag_release => EventResponse::IGNORED,
            SliderEvent::Click { position } => self.click(now, position, layout),
            SliderEvent::Focus => self.focus(),
            SliderEvent::Resize | SliderEvent::Blur => EventResponse::IGNORED,
        }
    }

    /// Runs every timer due at `now`, in deadline order.
    pub fn advance<L>(&mut self, now: Millis, layout: &L)
    where
        L: LayoutMeasure + ?Sized,
    {
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                SliderTimer::TapCommit => {
                    debug!(now, "tap settled");
                    self.commit();
                }
                SliderTimer::Resize => self.apply_resize(layout),
            }
        }
    }

    /// Enables or disables input.
    ///
    /// Disabling abandons an active drag or a pending tap commit without
    /// committing, returns the handle to the committed value, and unbinds the
    /// keyboard listener.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.config.disabled == disabled {
            return;
        }
        self.config.disabled = disabled;
        if disabled {
            let abandoned_drag = self.end_drag(false).is_some();
            let abandoned_tap = self.timers.cancel(&SliderTimer::TapCommit);
            if abandoned_drag || abandoned_tap {
                self.reseed_from_value();
            }
            self.listeners.release_slot(&mut self.focused);
            debug!("slider disabled");
        } else {
            debug!("slider enabled");
        }
    }

    /// Unbinds every listener and drops every pending timer.
    ///
    /// An in-progress drag is abandoned without a commit.
    pub fn unmount(mut self) -> Teardown {
        let released = self.listeners.active();
        if let Phase::Dragging { subscription, .. } = mem::replace(&mut self.phase, Phase::Idle) {
            self.listeners.release(subscription);
        }
        self.listeners.release_slot(&mut self.focused);
        self.listeners.release_slot(&mut self.mounted);
        let cancelled_timers = self.timers.cancel_all();
        debug_assert_eq!(
            self.listeners.outstanding(),
            0,
            "listener subscriptions leaked past unmount"
        );
        debug!(?released, cancelled_timers, "slider unmounted");
        Teardown {
            released,
            cancelled_timers,
        }
    }

    /// Presentation state, recomputed from the current position.
    ///
    /// The value shown here follows the handle live during a drag; reading it
    /// never fires the change callback.
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            drag_x: self.drag_x,
            value: self.derived_value(),
            show_bubble: self.show_bubble,
            is_control_by_keyboard: self.keyboard_control,
            button_size: self.track.button_size,
            height: self.config.height,
            max_scroll: self.track.max_scroll,
            total_steps: self.config.total_steps(),
            has_tick_marks: self.config.has_tick_marks,
            disabled: self.config.disabled,
            palette: self.config.palette,
        }
    }

    /// The last committed (or mounted) value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.committed
    }

    /// Current handle offset from the track start.
    #[must_use]
    pub fn drag_x(&self) -> f64 {
        self.drag_x
    }

    /// Current track geometry.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// The configuration, including the current disabled flag.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Returns `true` between drag start and drag end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The interaction that last moved the handle.
    #[must_use]
    pub fn interaction_mode(&self) -> Option<InteractionMode> {
        self.mode
    }

    /// Touch capability detected at mount.
    #[must_use]
    pub fn touch_support(&self) -> TouchSupport {
        self.touch
    }

    /// Global listener kinds the host must currently deliver.
    #[must_use]
    pub fn active_listeners(&self) -> ListenerKinds {
        self.listeners.active()
    }

    /// Earliest host time at which [`Slider::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Returns `true` if `timer` is scheduled.
    #[must_use]
    pub fn is_pending(&self, timer: SliderTimer) -> bool {
        self.timers.is_pending(&timer)
    }

    /// Places the handle at the committed value under the current geometry.
    fn reseed_from_value(&mut self) {
        self.reseed_to(self.committed);
    }

    fn reseed_to(&mut self, value: i64) {
        self.set_drag_x(geometry::offset_from_value(
            value,
            self.config.min,
            self.config.total_steps(),
            self.track.max_scroll,
        ));
    }

    fn derived_value(&self) -> i64 {
        geometry::value_from_offset(
            self.drag_x,
            self.track.max_scroll,
            self.config.total_steps(),
            self.config.min,
        )
    }

    /// Single write path for the position; a degenerate range pins it at 0.
    fn set_drag_x(&mut self, offset: f64) {
        self.drag_x = if self.config.total_steps() <= 0 {
            0.0
        } else {
            geometry::clamp_to_track(offset, self.track.max_scroll)
        };
    }

    fn track_left<L: LayoutMeasure + ?Sized>(&self, layout: &L) -> f64 {
        layout.container_bounds().x0 + self.config.padding
    }

    /// Hit test against the handle using the container's current position.
    fn handle_hit<L: LayoutMeasure + ?Sized>(&self, x: f64, layout: &L) -> bool {
        let track = Track {
            left: self.track_left(layout),
            ..self.track
        };
        track.handle_contains(self.drag_x, x)
    }

    fn commit(&mut self) {
        let value = self.derived_value();
        self.committed = value;
        debug!(value, drag_x = self.drag_x, mode = ?self.mode, "value committed");
        (self.on_change)(value);
    }

    fn begin_drag(&mut self, mode: InteractionMode, x: f64) {
        let kinds = match mode {
            InteractionMode::TouchDrag => ListenerKinds::TOUCH_MOVE | ListenerKinds::TOUCH_END,
            _ => ListenerKinds::POINTER_MOVE | ListenerKinds::POINTER_UP,
        };
        if self.timers.cancel(&SliderTimer::TapCommit) {
            debug!("pending tap commit superseded by drag");
        }
        let subscription = self.listeners.acquire(kinds);
        self.phase = Phase::Dragging {
            mode,
            last_x: x,
            subscription,
        };
        self.mode = Some(mode);
        self.keyboard_control = false;
        self.show_bubble = true;
        debug!(?mode, x, drag_x = self.drag_x, "drag started");
    }

    /// Leaves Dragging, releasing its listeners. Returns the drag's mode.
    fn end_drag(&mut self, commit: bool) -> Option<InteractionMode> {
        let Phase::Dragging {
            mode, subscription, ..
        } = mem::replace(&mut self.phase, Phase::Idle)
        else {
            return None;
        };
        self.listeners.release(subscription);
        self.show_bubble = false;
        debug!(?mode, drag_x = self.drag_x, commit, "drag ended");
        if commit {
            self.commit();
        }
        Some(mode)
    }

    fn dragging_mode(&self) -> Option<InteractionMode> {
        match self.phase {
            Phase::Dragging { mode, .. } => Some(mode),
            Phase::Idle => None,
        }
    }

    fn pointer_event<L: LayoutMeasure + ?Sized>(
        &mut self,
        event: &PointerEvent,
        layout: &L,
    ) -> EventResponse {
        match event {
            PointerEvent::Down(press) if event::is_touch(press.pointer.pointer_type) => {
                self.touch_start(press.state.logical_point(), layout)
            }
            PointerEvent::Down(press) => {
                if !matches!(press.button, None | Some(PointerButton::Primary)) {
                    return EventResponse::IGNORED;
                }
                self.pointer_down(press.state.logical_point(), layout)
            }
            PointerEvent::Move(update) if event::is_touch(update.pointer.pointer_type) => {
                self.touch_move(update.current.logical_point(), layout)
            }
            PointerEvent::Move(update) => self.pointer_move(update.current.logical_point()),
            PointerEvent::Up(release) if event::is_touch(release.pointer.pointer_type) => {
                self.finish_drag(InteractionMode::TouchDrag)
            }
            PointerEvent::Up(_) => self.finish_drag(InteractionMode::PointerDrag),
            PointerEvent::Cancel(_) => self.cancel_drag(),
            _ => EventResponse::IGNORED,
        }
    }

    fn pointer_down<L: LayoutMeasure + ?Sized>(
        &mut self,
        position: Point,
        layout: &L,
    ) -> EventResponse {
        if self.is_dragging() || !self.handle_hit(position.x, layout) {
            return EventResponse::IGNORED;
        }
        self.begin_drag(InteractionMode::PointerDrag, position.x);
        EventResponse::HANDLED
    }

    fn pointer_move(&mut self, position: Point) -> EventResponse {
        let Phase::Dragging {
            mode: InteractionMode::PointerDrag,
            last_x,
            ..
        } = self.phase
        else {
            return EventResponse::IGNORED;
        };
        self.set_drag_x(geometry::delta_offset_from_drag(
            self.drag_x,
            last_x,
            position.x,
        ));
        if let Phase::Dragging { last_x, .. } = &mut self.phase {
            *last_x = position.x;
        }
        trace!(x = position.x, drag_x = self.drag_x, "pointer drag");
        EventResponse::HANDLED
    }

    fn finish_drag(&mut self, expected: InteractionMode) -> EventResponse {
        if self.dragging_mode() != Some(expected) {
            return EventResponse::IGNORED;
        }
        self.end_drag(true);
        // The browser follows a mouse release with a click on whatever is
        // under the pointer, which may be the track.
        self.suppress_click = expected == InteractionMode::PointerDrag;
        EventResponse::HANDLED
    }

    /// The platform took the pointer away; the drag is abandoned.
    fn cancel_drag(&mut self) -> EventResponse {
        if self.end_drag(false).is_none() {
            return EventResponse::IGNORED;
        }
        self.reseed_from_value();
        EventResponse::HANDLED
    }

    fn touch_start<L: LayoutMeasure + ?Sized>(
        &mut self,
        position: Point,
        layout: &L,
    ) -> EventResponse {
        if self.is_dragging() {
            return EventResponse::IGNORED;
        }
        self.begin_drag(InteractionMode::TouchDrag, position.x);
        self.touch_position(position, layout);
        EventResponse::HANDLED
    }

    fn touch_move<L: LayoutMeasure + ?Sized>(
        &mut self,
        position: Point,
        layout: &L,
    ) -> EventResponse {
        if self.dragging_mode() != Some(InteractionMode::TouchDrag) {
            return EventResponse::IGNORED;
        }
        self.touch_position(position, layout);
        trace!(x = position.x, drag_x = self.drag_x, "touch drag");
        if self.touch.is_touch() {
            EventResponse::HANDLED.and_prevent_default()
        } else {
            EventResponse::HANDLED
        }
    }

    fn touch_position<L: LayoutMeasure + ?Sized>(&mut self, position: Point, layout: &L) {
        let left = self.track_left(layout);
        self.set_drag_x(geometry::pointer_offset_from_event(
            position.x,
            left,
            self.track.button_size,
        ));
        if let Phase::Dragging { last_x, .. } = &mut self.phase {
            *last_x = position.x;
        }
    }

    fn click<L: LayoutMeasure + ?Sized>(
        &mut self,
        now: Millis,
        position: Point,
        layout: &L,
    ) -> EventResponse {
        if self.is_dragging() || !self.touch.allows_tap_to_position() {
            return EventResponse::IGNORED;
        }
        if self.handle_hit(position.x, layout) {
            return EventResponse::IGNORED;
        }
        let left = self.track_left(layout);
        self.set_drag_x(geometry::pointer_offset_from_event(
            position.x,
            left,
            self.track.button_size,
        ));
        self.mode = Some(InteractionMode::TapToPosition);
        self.keyboard_control = true;
        let superseded = self
            .timers
            .schedule(SliderTimer::TapCommit, now, TAP_COMMIT_DELAY_MS);
        debug!(
            x = position.x,
            drag_x = self.drag_x,
            superseded,
            "tap commit scheduled"
        );
        EventResponse::HANDLED
    }

    fn focus(&mut self) -> EventResponse {
        if self.focused.is_some() {
            return EventResponse::IGNORED;
        }
        self.focused = Some(self.listeners.acquire(ListenerKinds::KEY_DOWN));
        trace!("keyboard listener bound");
        EventResponse::HANDLED
    }

    fn blur(&mut self) -> EventResponse {
        if self.listeners.release_slot(&mut self.focused).is_empty() {
            return EventResponse::IGNORED;
        }
        trace!("keyboard listener unbound");
        EventResponse::HANDLED
    }

    fn key_down(&mut self, event: &KeyboardEvent) -> EventResponse {
        // Keys step only from Idle; a drag commits once, on release.
        if self.focused.is_none() || !event.state.is_down() || self.is_dragging() {
            return EventResponse::IGNORED;
        }
        let Some(direction) = event::arrow_direction(&event.key) else {
            return EventResponse::IGNORED;
        };
        if self.timers.cancel(&SliderTimer::TapCommit) {
            debug!("pending tap commit superseded by key");
        }
        let step = geometry::per_step_pixel_distance(
            self.track.max_scroll,
            self.config.total_steps(),
        );
        self.set_drag_x(self.drag_x + f64::from(direction) * step);
        self.mode = Some(InteractionMode::KeyboardStep);
        self.keyboard_control = true;
        self.commit();
        EventResponse::HANDLED.and_prevent_default()
    }

    fn schedule_resize(&mut self, now: Millis) -> EventResponse {
        if self.mounted.is_none() {
            return EventResponse::IGNORED;
        }
        self.timers
            .schedule(SliderTimer::Resize, now, RESIZE_DEBOUNCE_MS);
        EventResponse::HANDLED
    }

    /// Re-measures the track and re-seeds the handle from a value.
    ///
    /// A position the user produced but that is not committed yet (a pending
    /// tap, a drag in progress) survives the re-layout; otherwise the handle
    /// follows the committed value.
    fn apply_resize<L: LayoutMeasure + ?Sized>(&mut self, layout: &L) {
        let uncommitted = self.is_dragging() || self.timers.is_pending(&SliderTimer::TapCommit);
        let value = if uncommitted {
            self.derived_value()
        } else {
            self.committed
        };
        self.track = Track::measure(
            layout.container_bounds(),
            self.config.height,
            self.config.padding,
        );
        self.reseed_to(value);
        debug!(
            width = self.track.width,
            max_scroll = self.track.max_scroll,
            value,
            uncommitted,
            drag_x = self.drag_x,
            "track re-measured"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;
    use ui_events::keyboard::{KeyState, NamedKey};

    use crate::device::StaticProbe;
    use crate::event::fixtures::{
        key, key_with_state, mouse_down, mouse_move, mouse_up, touch_cancel, touch_down,
        touch_move, touch_up,
    };

    const EPS: f64 = 1e-9;

    fn container(width: f64) -> Rect {
        Rect::new(0.0, 0.0, width, 40.0)
    }

    fn recording(config: SliderConfig, touch: bool, width: f64) -> (Slider, Rc<RefCell<Vec<i64>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let slider = Slider::mount(config, &StaticProbe(touch), &container(width))
            .with_on_change(move |v| sink.borrow_mut().push(v));
        (slider, log)
    }

    fn at(x: f64) -> Point {
        Point::new(x, 20.0)
    }

    #[test]
    fn mount_seeds_position_without_committing() {
        let (slider, log) = recording(SliderConfig::new(2, 30).with_value(10), false, 280.0);
        assert!((slider.drag_x() - 8.0 / 28.0 * 246.0).abs() < EPS);
        assert_eq!(slider.value(), 10);
        assert!(log.borrow().is_empty());
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);
    }

    #[test]
    fn out_of_range_initial_value_is_clamped() {
        let (slider, _) = recording(SliderConfig::new(2, 30), false, 280.0);
        assert_eq!(slider.drag_x(), 0.0);
        assert_eq!(slider.value(), 2);

        let (slider, _) = recording(SliderConfig::new(2, 30).with_value(99), false, 280.0);
        assert_eq!(slider.drag_x(), 246.0);
        assert_eq!(slider.value(), 30);
    }

    #[test]
    fn pointer_down_off_handle_does_not_drag() {
        let (mut slider, _) = recording(SliderConfig::new(0, 10), false, 280.0);
        let r = slider.on_event(0, mouse_down(200.0), &container(280.0));
        assert_eq!(r, EventResponse::IGNORED);
        assert!(!slider.is_dragging());
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);
    }

    #[test]
    fn mouse_drag_tracks_relatively_and_commits_once() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);

        // Press near the right edge of the handle: no jump.
        slider.on_event(0, mouse_down(30.0), &layout);
        assert!(slider.is_dragging());
        assert!(slider.snapshot().show_bubble);
        assert_eq!(slider.drag_x(), 0.0);
        assert_eq!(
            slider.active_listeners(),
            ListenerKinds::RESIZE | ListenerKinds::POINTER_MOVE | ListenerKinds::POINTER_UP
        );

        slider.on_event(1, mouse_move(40.0), &layout);
        slider.on_event(2, mouse_move(55.0), &layout);
        assert_eq!(slider.drag_x(), 25.0);
        assert_eq!(slider.snapshot().value, 25);
        assert!(log.borrow().is_empty());

        slider.on_event(3, mouse_up(), &layout);
        assert!(!slider.is_dragging());
        assert!(!slider.snapshot().show_bubble);
        assert_eq!(*log.borrow(), [25]);
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);

        // A stray second release is not another commit.
        let r = slider.on_event(4, mouse_up(), &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert_eq!(*log.borrow(), [25]);
    }

    #[test]
    fn click_after_mouse_drag_is_swallowed() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, mouse_down(10.0), &layout);
        slider.on_event(1, mouse_move(110.0), &layout);
        slider.on_event(2, mouse_up(), &layout);
        let r = slider.on_event(2, SliderEvent::Click { position: at(200.0) }, &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert!(!slider.is_pending(SliderTimer::TapCommit));
        assert_eq!(*log.borrow(), [100]);
    }

    #[test]
    fn touch_drag_tracks_absolutely() {
        let layout = Rect::new(100.0, 0.0, 380.0, 40.0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut slider = Slider::mount(SliderConfig::new(0, 246), &StaticProbe(true), &layout)
            .with_on_change(move |v| sink.borrow_mut().push(v));

        slider.on_event(0, touch_down(217.0), &layout);
        assert_eq!(slider.drag_x(), 100.0);
        assert_eq!(
            slider.active_listeners(),
            ListenerKinds::RESIZE | ListenerKinds::TOUCH_MOVE | ListenerKinds::TOUCH_END
        );

        let r = slider.on_event(1, touch_move(167.0), &layout);
        assert!(r.prevent_default);
        assert_eq!(slider.drag_x(), 50.0);

        // Mouse events do not end a touch drag.
        assert_eq!(
            slider.on_event(2, mouse_up(), &layout),
            EventResponse::IGNORED
        );
        slider.on_event(3, touch_up(), &layout);
        assert_eq!(*log.borrow(), [50]);
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);
    }

    #[test]
    fn tap_commits_after_delay_and_restarts_on_second_tap() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);

        slider.on_event(1_000, SliderEvent::Click { position: at(117.0) }, &layout);
        assert_eq!(slider.drag_x(), 100.0);
        assert!(slider.snapshot().is_control_by_keyboard);
        assert_eq!(slider.next_deadline(), Some(1_200));

        slider.on_event(1_100, SliderEvent::Click { position: at(167.0) }, &layout);
        assert_eq!(slider.next_deadline(), Some(1_300));

        slider.advance(1_250, &layout);
        assert!(log.borrow().is_empty());
        slider.advance(1_300, &layout);
        assert_eq!(*log.borrow(), [150]);
        assert_eq!(slider.value(), 150);
        assert_eq!(slider.interaction_mode(), Some(InteractionMode::TapToPosition));
    }

    #[test]
    fn tap_on_handle_or_on_touch_device_is_ignored() {
        let layout = container(280.0);
        let (mut slider, _) = recording(SliderConfig::new(0, 246), false, 280.0);
        let r = slider.on_event(0, SliderEvent::Click { position: at(20.0) }, &layout);
        assert_eq!(r, EventResponse::IGNORED);

        let (mut touch, _) = recording(SliderConfig::new(0, 246), true, 280.0);
        let r = touch.on_event(0, SliderEvent::Click { position: at(200.0) }, &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert_eq!(touch.drag_x(), 0.0);
    }

    #[test]
    fn drag_start_supersedes_pending_tap() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, SliderEvent::Click { position: at(117.0) }, &layout);
        slider.on_event(50, mouse_down(120.0), &layout);
        assert!(!slider.is_pending(SliderTimer::TapCommit));
        assert!(!slider.snapshot().is_control_by_keyboard);
        slider.on_event(60, mouse_move(130.0), &layout);
        slider.on_event(70, mouse_up(), &layout);
        slider.advance(10_000, &layout);
        assert_eq!(*log.borrow(), [110]);
    }

    #[test]
    fn keys_require_focus() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(2, 30).with_value(10), false, 280.0);
        let r = slider.on_event(0, key(NamedKey::ArrowRight), &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert!(log.borrow().is_empty());

        slider.on_event(0, SliderEvent::Focus, &layout);
        assert!(slider.active_listeners().contains(ListenerKinds::KEY_DOWN));
        let r = slider.on_event(1, key(NamedKey::ArrowRight), &layout);
        assert!(r.handled && r.prevent_default);
        assert_eq!(*log.borrow(), [11]);

        let r = slider.on_event(2, key(NamedKey::Enter), &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert_eq!(*log.borrow(), [11]);

        slider.on_event(3, SliderEvent::Blur, &layout);
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);
        slider.on_event(4, key(NamedKey::ArrowLeft), &layout);
        assert_eq!(*log.borrow(), [11]);
    }

    #[test]
    fn focus_twice_binds_once() {
        let layout = container(280.0);
        let (mut slider, _) = recording(SliderConfig::new(0, 10), false, 280.0);
        assert!(slider.on_event(0, SliderEvent::Focus, &layout).handled);
        assert!(!slider.on_event(0, SliderEvent::Focus, &layout).handled);
        assert!(slider.on_event(0, SliderEvent::Blur, &layout).handled);
        assert!(!slider.on_event(0, SliderEvent::Blur, &layout).handled);
    }

    #[test]
    fn resize_is_debounced_and_reseeds_from_value() {
        let (mut slider, log) = recording(SliderConfig::new(2, 30).with_value(15), false, 280.0);
        let wide = container(400.0);
        slider.on_event(0, SliderEvent::Resize, &wide);
        slider.on_event(500, SliderEvent::Resize, &wide);
        slider.advance(1_400, &wide);
        assert_eq!(slider.track().max_scroll, 246.0);

        slider.advance(1_500, &wide);
        assert_eq!(slider.track().max_scroll, 366.0);
        let expected = geometry::offset_from_value(15, 2, 28, 366.0);
        assert!((slider.drag_x() - expected).abs() < EPS);
        assert_eq!(slider.value(), 15);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn disabling_abandons_drag_without_commit() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, SliderEvent::Focus, &layout);
        slider.on_event(0, mouse_down(10.0), &layout);
        slider.on_event(1, mouse_move(60.0), &layout);

        slider.set_disabled(true);
        assert!(!slider.is_dragging());
        assert_eq!(slider.drag_x(), 0.0);
        assert!(!slider.snapshot().show_bubble);
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);
        assert!(log.borrow().is_empty());

        let r = slider.on_event(2, mouse_down(10.0), &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert!(slider.on_event(3, SliderEvent::Resize, &layout).handled);

        slider.set_disabled(false);
        assert!(slider.on_event(4, mouse_down(10.0), &layout).handled);
    }

    #[test]
    fn unmount_releases_everything() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, SliderEvent::Focus, &layout);
        slider.on_event(0, SliderEvent::Resize, &layout);
        slider.on_event(0, SliderEvent::Click { position: at(200.0) }, &layout);
        slider.on_event(1, mouse_down(190.0), &layout);
        slider.on_event(2, SliderEvent::Click { position: at(20.0) }, &layout);

        let teardown = slider.unmount();
        assert_eq!(
            teardown.released,
            ListenerKinds::RESIZE
                | ListenerKinds::KEY_DOWN
                | ListenerKinds::POINTER_MOVE
                | ListenerKinds::POINTER_UP
        );
        // The drag superseded the first tap; the second tap was ignored
        // mid-drag; only the resize was still pending.
        assert_eq!(teardown.cancelled_timers, 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn key_release_does_not_step() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 10), false, 280.0);
        slider.on_event(0, SliderEvent::Focus, &layout);
        let r = slider.on_event(1, key_with_state(NamedKey::ArrowRight, KeyState::Up), &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn arrow_keys_during_a_drag_are_ignored() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, SliderEvent::Focus, &layout);
        slider.on_event(1, mouse_down(17.0), &layout);
        slider.on_event(2, mouse_move(67.0), &layout);

        let r = slider.on_event(3, key(NamedKey::ArrowRight), &layout);
        assert_eq!(r, EventResponse::IGNORED);
        assert_eq!(slider.drag_x(), 50.0);
        assert!(log.borrow().is_empty());

        slider.on_event(4, mouse_up(), &layout);
        assert_eq!(*log.borrow(), [50]);
    }

    #[test]
    fn disabling_drops_pending_tap_and_restores_handle() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, SliderEvent::Click { position: at(117.0) }, &layout);
        assert_eq!(slider.drag_x(), 100.0);

        slider.set_disabled(true);
        slider.advance(10_000, &layout);
        assert_eq!(slider.drag_x(), 0.0);
        assert_eq!(slider.snapshot().value, slider.value());
        assert_eq!(slider.value(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn resize_keeps_a_pending_tap_position() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246), false, 280.0);
        slider.on_event(0, SliderEvent::Resize, &layout);
        slider.on_event(900, SliderEvent::Click { position: at(117.0) }, &layout);

        slider.advance(1_000, &layout);
        assert!(!slider.is_pending(SliderTimer::Resize));
        assert!((slider.drag_x() - 100.0).abs() < EPS);
        slider.advance(1_100, &layout);
        assert_eq!(*log.borrow(), [100]);
    }

    #[test]
    fn pointer_cancel_abandons_touch_drag() {
        let layout = container(280.0);
        let (mut slider, log) = recording(SliderConfig::new(0, 246).with_value(20), true, 280.0);
        slider.on_event(0, touch_down(117.0), &layout);
        slider.on_event(1, touch_move(167.0), &layout);
        assert_eq!(slider.drag_x(), 150.0);

        assert!(slider.on_event(2, touch_cancel(), &layout).handled);
        assert!(!slider.is_dragging());
        assert_eq!(slider.drag_x(), 20.0);
        assert_eq!(slider.active_listeners(), ListenerKinds::RESIZE);
        assert!(log.borrow().is_empty());

        // The touch end that never came is not a second release.
        assert_eq!(slider.on_event(3, touch_up(), &layout), EventResponse::IGNORED);
    }
}
