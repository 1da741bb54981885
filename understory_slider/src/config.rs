// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for a slider.

use core::fmt;

use peniko::Color;

use crate::geometry;

/// Default track height in pixels.
pub const DEFAULT_HEIGHT: f64 = 40.0;

/// Color tokens handed through to the presentation layer.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    /// Track fill and tooltip bubble.
    pub background: Color,
    /// Tooltip number.
    pub text: Color,
    /// Disc behind the tooltip number.
    pub text_background: Color,
    /// Tick marks.
    pub tick: Color,
}

impl Palette {
    const BLUE: Color = Color::from_rgb8(0x2d, 0x6c, 0xdf);
    const LIGHT_BLUE: Color = Color::from_rgb8(0xa8, 0xc7, 0xfa);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Self::BLUE,
            text: Self::BLUE,
            text_background: Color::WHITE,
            tick: Self::LIGHT_BLUE,
        }
    }
}

/// Slider parameters. Only `min` and `max` lack defaults.
///
/// Nothing here is validated on mount: an empty range or a track too small
/// for its handle produces a slider that renders but does not move. Call
/// [`SliderConfig::validate`] to reject such configurations up front.
#[derive(Copy, Clone, Debug)]
pub struct SliderConfig {
    /// Initial value; seeds the handle position at mount.
    pub value: i64,
    /// Lowest value.
    pub min: i64,
    /// Highest value.
    pub max: i64,
    /// Track height in pixels; the handle is slightly smaller.
    pub height: f64,
    /// Horizontal padding reserved at each end of the track.
    pub padding: f64,
    /// Ignore all user input.
    pub disabled: bool,
    /// Render one tick per step.
    pub has_tick_marks: bool,
    /// Colors for the presentation layer.
    pub palette: Palette,
}

impl SliderConfig {
    /// Creates a configuration over `[min, max]` with every other field at its
    /// default.
    #[must_use]
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            value: 0,
            min,
            max,
            height: DEFAULT_HEIGHT,
            padding: 0.0,
            disabled: false,
            has_tick_marks: true,
            palette: Palette::default(),
        }
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Sets the track height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the horizontal padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets whether input is ignored.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether tick marks are drawn.
    #[must_use]
    pub fn with_tick_marks(mut self, has_tick_marks: bool) -> Self {
        self.has_tick_marks = has_tick_marks;
        self
    }

    /// Replaces the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// `max - min`. Zero or negative for a degenerate range.
    #[must_use]
    pub fn total_steps(&self) -> i64 {
        self.max.saturating_sub(self.min)
    }

    /// Handle diameter for the configured height.
    #[must_use]
    pub fn button_size(&self) -> f64 {
        geometry::button_size(self.height)
    }

    /// Checks for configurations that mount but cannot be interacted with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.height.is_finite() || !self.padding.is_finite() {
            return Err(ConfigError::NonFiniteGeometry);
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.height < 0.0 {
            return Err(ConfigError::NegativeHeight(self.height));
        }
        if self.padding < 0.0 {
            return Err(ConfigError::NegativePadding(self.padding));
        }
        Ok(())
    }
}

/// Reason a [`SliderConfig`] failed [`SliderConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `min` is not below `max`.
    EmptyRange {
        /// Configured minimum.
        min: i64,
        /// Configured maximum.
        max: i64,
    },
    /// Track height is negative.
    NegativeHeight(f64),
    /// Padding is negative.
    NegativePadding(f64),
    /// Height or padding is NaN or infinite.
    NonFiniteGeometry,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { min, max } => {
                write!(f, "slider range is empty: min {min} is not below max {max}")
            }
            Self::NegativeHeight(height) => write!(f, "slider height {height} is negative"),
            Self::NegativePadding(padding) => write!(f, "slider padding {padding} is negative"),
            Self::NonFiniteGeometry => f.write_str("slider height or padding is not finite"),
        }
    }
}

impl core::error::Error for ConfigError {}
