// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// An opaque platform image the widget can pan over.
///
/// The widget only ever needs the pixel size; decoding, GPU upload, and
/// drawing stay with the host. Images are treated as immutable once set:
/// replacing the widget's image discards the previous one along with all
/// derived pan state.
pub trait PanImage {
    /// Pixel dimensions of the image.
    fn size(&self) -> Size;
}

/// A [`PanImage`] carrying nothing but its size.
///
/// Useful for tests and for hosts that keep the actual pixel data elsewhere
/// keyed by some other handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleImage {
    size: Size,
}

impl SimpleImage {
    /// Creates an image handle of the given pixel size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl PanImage for SimpleImage {
    fn size(&self) -> Size {
        self.size
    }
}
