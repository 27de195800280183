// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax Motion: turning angular-rate samples into a bounded pan offset.
//!
//! This crate owns the stateful half of the Parallax core: a controller that
//! subscribes to a gyroscope-style sample stream, integrates each sample into
//! the current viewport offset, clamps the result against
//! [`parallax_layout::PanBounds`], and asks a host-supplied animator to glide
//! the viewport to the new position.
//!
//! The crate is headless and collaborator-driven. Hosts supply:
//!
//! - a [`GyroSource`]: the sensor driver the controller starts and stops, and
//! - a [`PanAnimator`]: the rendering-side transition primitive
//!   (non-blocking, last-write-wins).
//!
//! and deliver samples by calling [`MotionController::on_sample`] from their
//! UI thread. All state lives in one owner; there is no internal locking and
//! no sample is ever processed concurrently with another.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use parallax_layout::{PanBounds, ScrollMode};
//! use parallax_motion::{GyroSource, MotionConfig, MotionController, PanAnimator, RotationRate};
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
//! struct Animator(Option<Point>);
//! impl PanAnimator for Animator {
//!     fn animate_to(&mut self, target: Point, _duration: f64) { self.0 = Some(target); }
//! }
//!
//! let bounds = PanBounds::compute(
//!     Size::new(1000.0, 500.0),
//!     Size::new(400.0, 500.0),
//!     ScrollMode::Horizontal,
//! )
//! .unwrap();
//!
//! let mut controller =
//!     MotionController::new(Gyro::default(), Animator::default(), MotionConfig::default());
//! controller.arm(bounds, Point::new(500.0, 0.0));
//!
//! // A yaw rate of 1.0 at the default speed pans 70 pixels left.
//! let new_offset = controller.on_sample(Some(RotationRate::new(1.0, 0.0)));
//! assert_eq!(new_offset, Some(Point::new(430.0, 0.0)));
//! ```
//!
//! ## Design notes
//!
//! - The per-sample arithmetic lives in the pure [`PanState`], which the
//!   controller wraps; the invariant `0 <= offset <= max_offset` per axis
//!   holds after every step for any input, including extreme rates.
//! - Missing samples (`None`) are ignored: the controller holds its last
//!   offset and waits. There is no failure state.
//! - The controller owns at most one active subscription; re-arming replaces
//!   it (stop-then-start), never stacks.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod sample;
mod state;
mod traits;

pub use controller::{MotionController, MotionDebugInfo};
pub use sample::{MotionConfig, RotationRate};
pub use state::PanState;
pub use traits::{GyroSource, PanAnimator};
