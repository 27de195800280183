// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax Widget: the host-facing shell around the pan core.
//!
//! [`GyroImageView`] wires the pure layout policies from `parallax_layout`
//! and the motion controller from `parallax_motion` into the configuration
//! surface a host embeds: set an image (or a URL to fetch one from), pick a
//! start anchor, a scroll mode, and a speed, and forward gyro samples from
//! the platform sensor.
//!
//! The widget is still headless. Hosts supply:
//!
//! - an image type implementing [`PanImage`] (anything with a pixel size),
//! - a [`parallax_motion::GyroSource`] wrapping the platform sensor driver,
//! - a [`parallax_motion::PanAnimator`] wrapping the rendering-side
//!   transition primitive, and
//! - optionally a [`ByteFetcher`] + [`ImageDecoder`] pair for URL loading.
//!
//! ## Threading
//!
//! All widget state is owned by one logical UI thread: every method takes
//! `&mut self` and nothing inside locks. The single cross-thread boundary is
//! the image fetch, which completes on whatever context the fetcher uses and
//! hands its bytes back through an explicit channel ([`FetchReply`]); the UI
//! owner drains that channel with [`GyroImageView::pump_fetches`] at its own
//! pace. No completion ever mutates widget state directly.
//!
//! ## Failure posture
//!
//! Best-effort, never crash: an invalid image (non-positive dimension) is
//! silently rejected, a failed fetch or decode leaves the widget exactly as
//! it was, and a missing sensor sample just holds the current offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use parallax_motion::{GyroSource, PanAnimator, RotationRate};
//! use parallax_widget::{GyroImageView, SimpleImage};
//!
//! #[derive(Default)]
//! struct Gyro(bool);
//! impl GyroSource for Gyro {
//!     fn start_sampling(&mut self, _interval: f64) { self.0 = true; }
//!     fn stop_sampling(&mut self) { self.0 = false; }
//!     fn is_sampling(&self) -> bool { self.0 }
//! }
//!
//! #[derive(Default)]
//! struct Animator;
//! impl PanAnimator for Animator {
//!     fn animate_to(&mut self, _target: kurbo::Point, _duration: f64) {}
//! }
//!
//! let mut view = GyroImageView::new(Gyro::default(), Animator::default());
//! view.set_viewport(Size::new(400.0, 500.0));
//! view.set_image(Some(SimpleImage::new(Size::new(1000.0, 500.0))));
//!
//! // Default anchor is the middle of the content.
//! assert_eq!(view.offset().unwrap().x, 500.0);
//!
//! // Gyro samples pan the image, clamped to the content bounds.
//! view.on_sample(Some(RotationRate::new(1.0, 0.0)));
//! assert_eq!(view.offset().unwrap().x, 430.0);
//! ```

mod fetch;
mod image;
mod widget;

pub use fetch::{ByteFetcher, DecodeError, FetchError, FetchReply, ImageDecoder};
pub use image::{PanImage, SimpleImage};
pub use widget::GyroImageView;
