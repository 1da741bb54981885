// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only presentation state.

use crate::config::Palette;
use crate::geometry;

/// Everything a renderer needs to draw the slider, as of one state change.
#[derive(Copy, Clone, Debug)]
pub struct SliderSnapshot {
    /// Handle offset from the track start.
    pub drag_x: f64,
    /// Value under the handle; follows the handle live during a drag.
    pub value: i64,
    /// Tooltip bubble is raised (a drag is in progress).
    pub show_bubble: bool,
    /// The last move came from a key or a track click; renderers animate the
    /// handle instead of snapping it.
    pub is_control_by_keyboard: bool,
    /// Handle diameter.
    pub button_size: f64,
    /// Track height.
    pub height: f64,
    /// Handle travel.
    pub max_scroll: f64,
    /// `max - min`.
    pub total_steps: i64,
    /// Tick marks requested.
    pub has_tick_marks: bool,
    /// Input is ignored.
    pub disabled: bool,
    /// Colors.
    pub palette: Palette,
}

impl SliderSnapshot {
    /// Vertical offset of the handle inside the track.
    #[must_use]
    pub fn handle_top(&self) -> f64 {
        (self.height - self.button_size) / 2.0
    }

    /// Tick centers relative to the track start; empty when tick marks are
    /// off or the range is degenerate.
    pub fn tick_offsets(&self) -> impl Iterator<Item = f64> + Clone {
        let steps = if self.has_tick_marks {
            self.total_steps
        } else {
            0
        };
        geometry::tick_offsets(steps, self.max_scroll, self.button_size)
    }
}
