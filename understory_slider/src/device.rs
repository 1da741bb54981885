// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot detection of touch-capable input.

/// Reports whether the host device accepts touch input.
///
/// A slider consults its probe exactly once, when it is mounted.
pub trait DeviceProbe {
    /// Returns `true` if touch input is available.
    fn has_touch(&self) -> bool;
}

impl<F: Fn() -> bool> DeviceProbe for F {
    fn has_touch(&self) -> bool {
        self()
    }
}

/// A probe with a fixed answer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticProbe(pub bool);

impl DeviceProbe for StaticProbe {
    fn has_touch(&self) -> bool {
        self.0
    }
}

/// Cached result of a [`DeviceProbe`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TouchSupport {
    /// Mouse, pen or keyboard only.
    #[default]
    PointerOnly,
    /// Touch input is available.
    Touch,
}

impl TouchSupport {
    /// Runs `probe` once.
    pub fn detect<P: DeviceProbe + ?Sized>(probe: &P) -> Self {
        if probe.has_touch() {
            Self::Touch
        } else {
            Self::PointerOnly
        }
    }

    /// Returns `true` for [`TouchSupport::Touch`].
    #[must_use]
    pub fn is_touch(self) -> bool {
        self == Self::Touch
    }

    /// Clicking the track jumps the handle only on pointer-only devices; on
    /// touch devices the touch-start already positions it.
    #[must_use]
    pub fn allows_tap_to_position(self) -> bool {
        !self.is_touch()
    }
}
