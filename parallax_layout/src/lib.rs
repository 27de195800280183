// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax Layout: pannable-surface layout and start-offset policies.
//!
//! This crate provides the small, pure layout core shared by the Parallax
//! crates. Given an image's pixel size, the current viewport size, and a
//! scroll mode, it answers two questions:
//!
//! - How large is the pannable surface, and how far may the viewport offset
//!   travel on each axis? ([`PanBounds`])
//! - Where should the viewport point when an image first loads?
//!   ([`start_offset`] and [`StartAnchor`])
//!
//! It does **not** own any image data, sensor stream, or rendering backend.
//! Callers are expected to:
//! - Recompute [`PanBounds`] whenever the image, viewport, or
//!   [`ScrollMode`] changes (recomputation is pure and idempotent).
//! - Clamp every offset they apply through [`PanBounds::clamp`].
//! - Drive the actual panning at a higher layer (see `parallax_motion`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use parallax_layout::{PanBounds, ScrollMode, StartAnchor, start_offset_clamped};
//!
//! // A 1000x500 image shown through a 400x500 viewport, horizontal-only.
//! let image = Size::new(1000.0, 500.0);
//! let viewport = Size::new(400.0, 500.0);
//! let bounds = PanBounds::compute(image, viewport, ScrollMode::Horizontal).unwrap();
//!
//! assert_eq!(bounds.max_offset_x(), 600.0);
//! assert_eq!(bounds.max_offset_y(), 0.0);
//!
//! // Point at the middle of the content to begin with.
//! let start = start_offset_clamped(StartAnchor::Middle, &bounds, viewport);
//! assert_eq!((start.x, start.y), (500.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - All sizes and offsets are in pixel units, `f64`, kurbo-typed.
//! - A viewport that has not been laid out yet (zero size) produces a
//!   degenerate all-zero bounds rather than an error; panning is simply a
//!   no-op until the first real resize arrives.
//! - An image with a non-positive dimension is rejected with
//!   [`InvalidImageError`]; everything downstream treats that as "no image".
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod modes;
mod start;

pub use bounds::{InvalidImageError, PanBounds};
pub use modes::{ScrollMode, StartAnchor};
pub use start::{start_offset, start_offset_clamped};
