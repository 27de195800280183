// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A gyroscope-style sample source the controller can start and stop.
///
/// Implementations wrap the platform sensor driver. The controller only
/// configures the stream; actual samples are delivered by the host calling
/// [`crate::MotionController::on_sample`] on its UI thread, in delivery
/// order.
///
/// Implementations must tolerate [`GyroSource::stop_sampling`] being called
/// when not sampling.
pub trait GyroSource {
    /// Begins delivering samples at the given interval, in seconds.
    ///
    /// Calling this while already sampling reconfigures the stream; the
    /// controller nevertheless always stops before starting so that a single
    /// subscription exists at a time.
    fn start_sampling(&mut self, interval: f64);

    /// Stops delivering samples. Must be a no-op when not sampling.
    fn stop_sampling(&mut self);

    /// Returns `true` while the stream is active.
    fn is_sampling(&self) -> bool;
}

/// Viewport transition primitive supplied by the rendering side.
///
/// Semantics required of implementations:
///
/// - Non-blocking and fire-and-forget: the call only records a new target.
/// - Last-write-wins: a new target issued before the previous transition
///   completes simply replaces it; nothing queues.
/// - Concurrent user interaction (manual pan gestures) must keep working
///   while a transition is in flight.
pub trait PanAnimator {
    /// Requests a smoothed transition of the viewport to `target` over
    /// `duration` seconds.
    fn animate_to(&mut self, target: Point, duration: f64);
}
