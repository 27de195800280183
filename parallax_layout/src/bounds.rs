// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size, Vec2};

use crate::modes::ScrollMode;

/// Error returned when an image has a non-positive dimension.
///
/// Such an image cannot define a pannable surface. Callers that follow the
/// best-effort widget posture typically treat this as "no image" rather than
/// surfacing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidImageError {
    /// The offending image width, in pixels.
    pub width: f64,
    /// The offending image height, in pixels.
    pub height: f64,
}

impl fmt::Display for InvalidImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image size {}x{} has a non-positive dimension",
            self.width, self.height
        )
    }
}

impl core::error::Error for InvalidImageError {}

/// Derived bounds of the pannable surface.
///
/// `PanBounds` captures the content size of the surface behind the viewport
/// and how far the viewport offset may travel on each axis. It is a pure
/// function of the image size, viewport size, and [`ScrollMode`], and must be
/// recomputed whenever any of those change; recomputation with identical
/// inputs yields identical bounds.
///
/// Offsets are valid when `0 <= x <= max_offset_x()` and
/// `0 <= y <= max_offset_y()`. A bound of zero on an axis is not an error:
/// panning on that axis simply collapses to a single position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    content: Size,
    max_offset: Vec2,
    mode: ScrollMode,
}

impl PanBounds {
    /// Computes the pannable bounds for an image shown through a viewport.
    ///
    /// - `content.width` is the image width.
    /// - `content.height` is the image height in [`ScrollMode::Full`], or the
    ///   viewport height in [`ScrollMode::Horizontal`] (the image is treated
    ///   as pre-scaled to fill the viewport height).
    /// - The maximum offset on each axis is the non-negative overhang of the
    ///   content beyond the viewport; vertical travel is zero in
    ///   [`ScrollMode::Horizontal`].
    ///
    /// An image with a non-positive dimension yields [`InvalidImageError`].
    /// A viewport with a non-positive dimension (not laid out yet) yields a
    /// degenerate all-zero bounds rather than an error.
    pub fn compute(
        image: Size,
        viewport: Size,
        mode: ScrollMode,
    ) -> Result<Self, InvalidImageError> {
        if image.width <= 0.0 || image.height <= 0.0 {
            return Err(InvalidImageError {
                width: image.width,
                height: image.height,
            });
        }
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Ok(Self {
                content: Size::ZERO,
                max_offset: Vec2::ZERO,
                mode,
            });
        }

        let content = match mode {
            ScrollMode::Horizontal => Size::new(image.width, viewport.height),
            ScrollMode::Full => image,
        };
        let max_x = (content.width - viewport.width).max(0.0);
        let max_y = match mode {
            ScrollMode::Horizontal => 0.0,
            ScrollMode::Full => (content.height - viewport.height).max(0.0),
        };

        Ok(Self {
            content,
            max_offset: Vec2::new(max_x, max_y),
            mode,
        })
    }

    /// Returns the content size of the pannable surface.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Returns the maximum horizontal offset.
    #[must_use]
    pub fn max_offset_x(&self) -> f64 {
        self.max_offset.x
    }

    /// Returns the maximum vertical offset.
    ///
    /// Always `0.0` in [`ScrollMode::Horizontal`].
    #[must_use]
    pub fn max_offset_y(&self) -> f64 {
        self.max_offset.y
    }

    /// Returns the scroll mode these bounds were computed under.
    #[must_use]
    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Returns `true` when no panning is possible on either axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max_offset.x == 0.0 && self.max_offset.y == 0.0
    }

    /// Clamps an offset into the valid range on both axes.
    ///
    /// In [`ScrollMode::Horizontal`] the vertical bound is zero, so the
    /// clamped offset always has `y == 0.0`.
    #[must_use]
    pub fn clamp(&self, offset: Point) -> Point {
        Point::new(
            offset.x.clamp(0.0, self.max_offset.x),
            offset.y.clamp(0.0, self.max_offset.y),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use kurbo::{Point, Size};

    use super::{PanBounds, ScrollMode};

    #[test]
    fn horizontal_bounds_use_viewport_height() {
        let bounds = PanBounds::compute(
            Size::new(1000.0, 500.0),
            Size::new(400.0, 300.0),
            ScrollMode::Horizontal,
        )
        .unwrap();

        assert_eq!(bounds.content_size(), Size::new(1000.0, 300.0));
        assert_eq!(bounds.max_offset_x(), 600.0);
        assert_eq!(bounds.max_offset_y(), 0.0);
    }

    #[test]
    fn full_bounds_use_image_height() {
        let bounds = PanBounds::compute(
            Size::new(1000.0, 800.0),
            Size::new(400.0, 300.0),
            ScrollMode::Full,
        )
        .unwrap();

        assert_eq!(bounds.content_size(), Size::new(1000.0, 800.0));
        assert_eq!(bounds.max_offset_x(), 600.0);
        assert_eq!(bounds.max_offset_y(), 500.0);
    }

    #[test]
    fn recompute_with_identical_inputs_is_idempotent() {
        let image = Size::new(1234.0, 567.0);
        let viewport = Size::new(400.0, 300.0);
        let a = PanBounds::compute(image, viewport, ScrollMode::Full).unwrap();
        let b = PanBounds::compute(image, viewport, ScrollMode::Full).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn image_narrower_than_viewport_collapses_to_zero() {
        let bounds = PanBounds::compute(
            Size::new(300.0, 500.0),
            Size::new(400.0, 500.0),
            ScrollMode::Horizontal,
        )
        .unwrap();

        assert_eq!(bounds.max_offset_x(), 0.0);
        assert!(bounds.is_degenerate());
        // Any offset clamps to the single valid position.
        assert_eq!(
            bounds.clamp(Point::new(1_000_000.0, -42.0)),
            Point::new(0.0, 0.0)
        );
    }

    #[test]
    fn non_positive_image_dimension_is_rejected() {
        let viewport = Size::new(400.0, 300.0);
        assert!(PanBounds::compute(Size::new(0.0, 500.0), viewport, ScrollMode::Full).is_err());
        assert!(PanBounds::compute(Size::new(800.0, -1.0), viewport, ScrollMode::Full).is_err());
    }

    #[test]
    fn zero_viewport_yields_degenerate_bounds() {
        let bounds = PanBounds::compute(
            Size::new(1000.0, 500.0),
            Size::ZERO,
            ScrollMode::Full,
        )
        .unwrap();

        assert_eq!(bounds.content_size(), Size::ZERO);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn clamp_pins_y_to_zero_in_horizontal_mode() {
        let bounds = PanBounds::compute(
            Size::new(1000.0, 500.0),
            Size::new(400.0, 500.0),
            ScrollMode::Horizontal,
        )
        .unwrap();

        let clamped = bounds.clamp(Point::new(250.0, 300.0));
        assert_eq!(clamped, Point::new(250.0, 0.0));
    }

    #[test]
    fn invalid_image_error_displays_dimensions() {
        let err = PanBounds::compute(
            Size::new(-3.0, 500.0),
            Size::new(400.0, 300.0),
            ScrollMode::Full,
        )
        .unwrap_err();
        assert_eq!(err.width, -3.0);
        let msg = alloc::format!("{err}");
        assert!(msg.contains("non-positive"), "unexpected message: {msg}");
    }
}
