// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which axes the viewport may pan along.
///
/// This mode is consumed by [`crate::PanBounds::compute`] when deriving the
/// pannable surface from the image and viewport sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Pan horizontally only.
    ///
    /// The image is treated as pre-scaled to fill the viewport height, so the
    /// content height equals the viewport height and the vertical offset is
    /// pinned to zero.
    #[default]
    Horizontal,
    /// Pan on both axes.
    ///
    /// The content takes the image's full pixel size and the offset may
    /// travel vertically as well as horizontally.
    Full,
}

/// Where the viewport points when an image first loads.
///
/// Consumed by [`crate::start_offset`]. The vertical start offset is always
/// top-aligned regardless of the anchor or [`ScrollMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StartAnchor {
    /// Start at the left edge of the content.
    Left,
    /// Start at half the content width.
    #[default]
    Middle,
    /// Start at the right edge of the content.
    Right,
}
