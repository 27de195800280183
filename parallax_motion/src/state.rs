// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use parallax_layout::PanBounds;

use crate::sample::RotationRate;

/// Pure per-sample pan state: current offset plus the bounds it lives in.
///
/// `PanState` is the arithmetic core of the motion controller, split out so
/// the integrate-and-clamp rule can be exercised without any sensor or
/// animator plumbing. The offset always satisfies
/// `0 <= x <= max_offset_x()` and `0 <= y <= max_offset_y()`; every
/// constructor and mutation clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanState {
    bounds: PanBounds,
    offset: Point,
}

impl PanState {
    /// Creates a pan state at `start`, clamped into `bounds`.
    #[must_use]
    pub fn new(bounds: PanBounds, start: Point) -> Self {
        Self {
            bounds,
            offset: bounds.clamp(start),
        }
    }

    /// Returns the current offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns the bounds the offset is clamped against.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    /// Replaces the bounds, re-clamping the current offset into them.
    ///
    /// Used on viewport resize: the offset keeps its position where possible
    /// and is pulled back in where the travel range shrank.
    pub fn set_bounds(&mut self, bounds: PanBounds) {
        self.bounds = bounds;
        self.offset = bounds.clamp(self.offset);
    }

    /// Integrates one sample into the offset and returns the new position.
    ///
    /// The candidate position is `offset - rate * speed` per axis, clamped
    /// into the bounds. On an axis with zero travel (degenerate bounds, or
    /// the vertical axis in horizontal-only mode) the sample has no effect
    /// regardless of magnitude.
    pub fn step(&mut self, rate: RotationRate, speed: f64) -> Point {
        let candidate = Point::new(
            self.offset.x - rate.yaw * speed,
            self.offset.y - rate.pitch * speed,
        );
        self.offset = self.bounds.clamp(candidate);
        self.offset
    }
}
