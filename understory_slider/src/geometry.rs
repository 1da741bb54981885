// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversions between track pixel offsets and integer step values.
//!
//! Every function here is stateless and total: degenerate inputs (an empty or
//! inverted range, a track narrower than the handle, NaN coordinates) resolve
//! to the low end of the range instead of dividing by zero.
//!
//! Offsets are measured from the track start (after padding) to the left edge
//! of the handle, so a handle resting at `max_scroll` touches the far end.
//!
//! ```
//! use understory_slider::geometry::{
//!     button_size, max_scroll_distance, offset_from_value, value_from_offset,
//! };
//!
//! let button = button_size(40.0);
//! assert_eq!(button, 34.0);
//! let max_scroll = max_scroll_distance(280.0, button, 0.0);
//! assert_eq!(max_scroll, 246.0);
//!
//! let offset = offset_from_value(10, 2, 28, max_scroll);
//! assert!((offset - 70.2857).abs() < 1e-3);
//! assert_eq!(value_from_offset(offset, max_scroll, 28, 2), 10);
//! ```

use core::ops::Range;

use kurbo::Rect;

/// Vertical space between the track edge and the handle, summed over top and
/// bottom.
pub const VERTICAL_PADDING: f64 = 6.0;

/// `x` if it is positive, otherwise `0.0`. NaN maps to `0.0`.
fn non_negative(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Handle diameter for a track of the given `height`.
#[must_use]
pub fn button_size(height: f64) -> f64 {
    non_negative(height - VERTICAL_PADDING)
}

/// Travel available to the handle: `width - button_size - 2 * padding`,
/// never negative.
#[must_use]
pub fn max_scroll_distance(width: f64, button_size: f64, padding: f64) -> f64 {
    non_negative(width - button_size - 2.0 * padding)
}

/// Clamps `offset` into `[0, max_scroll]`.
///
/// Every offset is passed through here before it is stored or rendered. NaN
/// clamps to `0.0`.
#[must_use]
pub fn clamp_to_track(offset: f64, max_scroll: f64) -> f64 {
    let max_scroll = non_negative(max_scroll);
    if offset.is_nan() || offset <= 0.0 {
        0.0
    } else if offset > max_scroll {
        max_scroll
    } else {
        offset
    }
}

/// Linear map from a step value to a pixel offset.
///
/// The result is not clamped; values outside `[min, min + total_steps]` map
/// outside the track. Returns `0.0` for a degenerate range.
#[must_use]
pub fn offset_from_value(value: i64, min: i64, total_steps: i64, max_scroll: f64) -> f64 {
    if total_steps <= 0 {
        return 0.0;
    }
    value.saturating_sub(min) as f64 / total_steps as f64 * max_scroll
}

/// Inverse of [`offset_from_value`], rounded half-up to the nearest step.
///
/// The offset is clamped first, so the result always lies in
/// `[min, min + total_steps]`. A degenerate range or a zero-length track
/// yields `min`.
#[must_use]
pub fn value_from_offset(offset: f64, max_scroll: f64, total_steps: i64, min: i64) -> i64 {
    if total_steps <= 0 || max_scroll.is_nan() || max_scroll <= 0.0 {
        return min;
    }
    let fraction = clamp_to_track(offset, max_scroll) / max_scroll;
    let steps = round_half_up(fraction * total_steps as f64).min(total_steps);
    min.saturating_add(steps)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "callers pass a non-negative value bounded by the step count"
)]
fn round_half_up(x: f64) -> i64 {
    (x + 0.5) as i64
}

/// Pixels travelled by one keyboard step.
///
/// Repeated steps accumulate floating point error when `total_steps` does not
/// divide `max_scroll` evenly; the value is re-derived by rounding on every
/// commit, so the error only surfaces as an occasional skipped or repeated
/// step over long runs.
#[must_use]
pub fn per_step_pixel_distance(max_scroll: f64, total_steps: i64) -> f64 {
    if total_steps <= 0 {
        return 0.0;
    }
    max_scroll / total_steps as f64
}

/// Offset that centers the handle under an absolute pointer or touch `x`.
#[must_use]
pub fn pointer_offset_from_event(x: f64, track_left: f64, button_size: f64) -> f64 {
    x - track_left - button_size / 2.0
}

/// Offset after moving the pointer from `previous_x` to `current_x`.
///
/// Mouse drags track relatively so the handle does not jump under the cursor
/// when the press landed off-center.
#[must_use]
pub fn delta_offset_from_drag(previous_offset: f64, previous_x: f64, current_x: f64) -> f64 {
    previous_offset + (current_x - previous_x)
}

/// Center x (relative to the track start) of every step position.
///
/// Yields `total_steps + 1` positions, or nothing for a degenerate range.
pub fn tick_offsets(
    total_steps: i64,
    max_scroll: f64,
    button_size: f64,
) -> impl Iterator<Item = f64> + Clone {
    let count = if total_steps > 0 { total_steps } else { -1 };
    (0..=count).map(move |step| {
        offset_from_value(step, 0, total_steps, max_scroll) + button_size / 2.0
    })
}

/// Track geometry derived from one layout measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Track {
    /// Client x of the track start, after padding.
    pub left: f64,
    /// Measured container width.
    pub width: f64,
    /// Handle diameter.
    pub button_size: f64,
    /// Horizontal padding reserved at each end.
    pub padding: f64,
    /// Travel available to the handle; see [`max_scroll_distance`].
    pub max_scroll: f64,
}

impl Track {
    /// Derives the track from a measured container rect.
    #[must_use]
    pub fn measure(bounds: Rect, height: f64, padding: f64) -> Self {
        let button_size = button_size(height);
        let width = non_negative(bounds.width());
        Self {
            left: bounds.x0 + padding,
            width,
            button_size,
            padding,
            max_scroll: max_scroll_distance(width, button_size, padding),
        }
    }

    /// Client-space span covered by the handle when it sits at `drag_x`.
    #[must_use]
    pub fn handle_span(&self, drag_x: f64) -> Range<f64> {
        let start = self.left + drag_x;
        start..start + self.button_size
    }

    /// Returns `true` if client `x` falls on the handle at `drag_x`.
    #[must_use]
    pub fn handle_contains(&self, drag_x: f64, x: f64) -> bool {
        let span = self.handle_span(drag_x);
        x >= span.start && x <= span.end
    }
}
