// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::bounds::PanBounds;
use crate::modes::StartAnchor;

/// Computes the raw start offset for a freshly loaded image.
///
/// - [`StartAnchor::Left`] → `(0, 0)`.
/// - [`StartAnchor::Middle`] → half the *content* width. Note this is not
///   limited to the maximum offset; for images less than twice the viewport
///   width it lands beyond `max_offset_x()`.
/// - [`StartAnchor::Right`] → `content_width - viewport_width`, which is
///   negative for images narrower than the viewport.
///
/// The vertical component is always `0.0` (top-aligned) regardless of anchor
/// or scroll mode.
///
/// The returned point is deliberately unclamped so the anchor position stays
/// a pure function of the inputs; apply [`PanBounds::clamp`] (or call
/// [`start_offset_clamped`]) before handing the offset to anything that moves
/// the viewport.
#[must_use]
pub fn start_offset(anchor: StartAnchor, bounds: &PanBounds, viewport: Size) -> Point {
    let content = bounds.content_size();
    match anchor {
        StartAnchor::Left => Point::ZERO,
        StartAnchor::Middle => Point::new(content.width / 2.0, 0.0),
        StartAnchor::Right => Point::new(content.width - viewport.width, 0.0),
    }
}

/// [`start_offset`] with the result clamped into `bounds`.
///
/// This is the variant consumers that apply the offset directly should use;
/// it never produces a position outside the valid pan range.
#[must_use]
pub fn start_offset_clamped(anchor: StartAnchor, bounds: &PanBounds, viewport: Size) -> Point {
    bounds.clamp(start_offset(anchor, bounds, viewport))
}
