// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use parallax_layout::PanBounds;

use crate::sample::{MotionConfig, RotationRate};
use crate::state::PanState;
use crate::traits::{GyroSource, PanAnimator};

/// Motion-to-offset controller: sensor subscription lifecycle plus the
/// per-sample offset update.
///
/// The controller is either *idle* (no pan state, nothing to do) or *armed*
/// (pan state present and the gyro subscription active). Arming happens when
/// an image loads ([`MotionController::arm`]); each sample delivered while
/// armed moves the offset and requests a smoothed viewport transition from
/// the [`PanAnimator`].
///
/// [`MotionController::stop`] pauses sampling but keeps the offset, so
/// [`MotionController::resume`] continues where panning left off; only a new
/// [`MotionController::arm`] (or [`MotionController::disarm`]) resets the
/// offset. The controller owns its [`GyroSource`] exclusively and never holds
/// more than one active subscription.
#[derive(Debug)]
pub struct MotionController<G, A> {
    gyro: G,
    animator: A,
    config: MotionConfig,
    state: Option<PanState>,
}

impl<G: GyroSource, A: PanAnimator> MotionController<G, A> {
    /// Creates an idle controller owning the given collaborators.
    #[must_use]
    pub fn new(gyro: G, animator: A, config: MotionConfig) -> Self {
        Self {
            gyro,
            animator,
            config,
            state: None,
        }
    }

    /// Arms the controller for a freshly loaded image.
    ///
    /// `start` is clamped into `bounds` and becomes the current offset,
    /// discarding any previous pan state. The sensor subscription is
    /// replaced, never stacked: an existing stream is stopped before the new
    /// one starts.
    pub fn arm(&mut self, bounds: PanBounds, start: Point) {
        self.state = Some(PanState::new(bounds, start));
        self.gyro.stop_sampling();
        self.gyro.start_sampling(self.config.sample_interval);
    }

    /// Restarts sampling against the current offset.
    ///
    /// Unlike [`MotionController::arm`] this does not reset the offset; it is
    /// the "start" half of a stop/start cycle. A no-op while idle (there is
    /// no image to pan).
    pub fn resume(&mut self) {
        if self.state.is_none() {
            return;
        }
        self.gyro.stop_sampling();
        self.gyro.start_sampling(self.config.sample_interval);
    }

    /// Stops sampling, keeping the offset for a later [`MotionController::resume`].
    ///
    /// Idempotent: stopping an already stopped controller is a no-op.
    /// In-flight viewport transitions are not cancelled; they finish at their
    /// last requested target.
    pub fn stop(&mut self) {
        if self.gyro.is_sampling() {
            self.gyro.stop_sampling();
        }
    }

    /// Stops sampling and discards all pan state (image cleared).
    pub fn disarm(&mut self) {
        self.stop();
        self.state = None;
    }

    /// Handles one sample delivery from the host.
    ///
    /// Returns the new offset when a sample was integrated. An absent sample
    /// (`None`) is ignored per the sensor contract: the controller holds its
    /// last offset and waits for the next valid one. Samples arriving while
    /// not armed are ignored entirely.
    pub fn on_sample(&mut self, sample: Option<RotationRate>) -> Option<Point> {
        if !self.is_armed() {
            return None;
        }
        let rate = sample?;
        let state = self.state.as_mut()?;
        let target = state.step(rate, self.config.speed);
        self.animator
            .animate_to(target, self.config.transition_duration);
        Some(target)
    }

    /// Replaces the bounds (viewport resized), re-clamping the offset.
    ///
    /// A no-op while idle; resize before any image loads has nothing to
    /// re-clamp.
    pub fn set_bounds(&mut self, bounds: PanBounds) {
        if let Some(state) = self.state.as_mut() {
            state.set_bounds(bounds);
        }
    }

    /// Returns `true` while the controller holds pan state and an active
    /// subscription.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state.is_some() && self.gyro.is_sampling()
    }

    /// Returns the current offset, if any pan state exists.
    #[must_use]
    pub fn offset(&self) -> Option<Point> {
        self.state.map(|s| s.offset())
    }

    /// Returns the current bounds, if any pan state exists.
    #[must_use]
    pub fn bounds(&self) -> Option<PanBounds> {
        self.state.map(|s| s.bounds())
    }

    /// Returns the controller configuration.
    #[must_use]
    pub fn config(&self) -> MotionConfig {
        self.config
    }

    /// Replaces the controller configuration.
    ///
    /// Takes effect from the next sample (speed, transition duration) or the
    /// next subscription start (sample interval).
    pub fn set_config(&mut self, config: MotionConfig) {
        self.config = config;
    }

    /// Returns the owned gyro source.
    #[must_use]
    pub fn gyro(&self) -> &G {
        &self.gyro
    }

    /// Returns the owned animator.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MotionDebugInfo {
        MotionDebugInfo {
            armed: self.is_armed(),
            sampling: self.gyro.is_sampling(),
            offset: self.offset(),
            bounds: self.bounds(),
            config: self.config,
        }
    }
}

/// Debug snapshot of a [`MotionController`] state.
#[derive(Clone, Copy, Debug)]
pub struct MotionDebugInfo {
    /// Whether pan state exists and the subscription is active.
    pub armed: bool,
    /// Whether the gyro source reports an active stream.
    pub sampling: bool,
    /// Current offset, if pan state exists.
    pub offset: Option<Point>,
    /// Current bounds, if pan state exists.
    pub bounds: Option<PanBounds>,
    /// Controller configuration.
    pub config: MotionConfig,
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use kurbo::{Point, Size};

    use parallax_layout::{PanBounds, ScrollMode};

    use super::{GyroSource, MotionConfig, MotionController, PanAnimator, RotationRate};

    /// Records every start/stop so subscription lifecycles are observable.
    #[derive(Default)]
    struct RecordingGyro {
        active: bool,
        starts: Vec<f64>,
        stops: u32,
    }

    impl GyroSource for RecordingGyro {
        fn start_sampling(&mut self, interval: f64) {
            self.active = true;
            self.starts.push(interval);
        }

        fn stop_sampling(&mut self) {
            if self.active {
                self.stops += 1;
            }
            self.active = false;
        }

        fn is_sampling(&self) -> bool {
            self.active
        }
    }

    #[derive(Default)]
    struct RecordingAnimator {
        requests: Vec<(Point, f64)>,
    }

    impl PanAnimator for RecordingAnimator {
        fn animate_to(&mut self, target: Point, duration: f64) {
            self.requests.push((target, duration));
        }
    }

    fn horizontal_bounds() -> PanBounds {
        PanBounds::compute(
            Size::new(1000.0, 500.0),
            Size::new(400.0, 500.0),
            ScrollMode::Horizontal,
        )
        .unwrap()
    }

    fn armed_controller() -> MotionController<RecordingGyro, RecordingAnimator> {
        let mut controller = MotionController::new(
            RecordingGyro::default(),
            RecordingAnimator::default(),
            MotionConfig::default(),
        );
        controller.arm(horizontal_bounds(), Point::new(500.0, 0.0));
        controller
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = MotionController::new(
            RecordingGyro::default(),
            RecordingAnimator::default(),
            MotionConfig::default(),
        );
        assert!(!controller.is_armed());
        assert_eq!(controller.offset(), None);
        assert!(!controller.gyro().is_sampling());
    }

    #[test]
    fn arm_starts_sampling_at_configured_interval() {
        let controller = armed_controller();
        assert!(controller.is_armed());
        assert_eq!(controller.offset(), Some(Point::new(500.0, 0.0)));
        assert_eq!(controller.gyro().starts.as_slice(), &[0.1]);
    }

    #[test]
    fn sample_moves_offset_and_requests_transition() {
        let mut controller = armed_controller();

        let offset = controller.on_sample(Some(RotationRate::new(1.0, 0.0)));
        assert_eq!(offset, Some(Point::new(430.0, 0.0)));
        assert_eq!(
            controller.animator().requests.as_slice(),
            &[(Point::new(430.0, 0.0), 0.5)]
        );
    }

    #[test]
    fn absent_sample_holds_last_offset() {
        let mut controller = armed_controller();
        controller.on_sample(Some(RotationRate::new(1.0, 0.0)));

        assert_eq!(controller.on_sample(None), None);
        assert_eq!(controller.offset(), Some(Point::new(430.0, 0.0)));
        // No transition requested for the missing sample.
        assert_eq!(controller.animator().requests.len(), 1);
    }

    #[test]
    fn samples_while_idle_are_ignored() {
        let mut controller = MotionController::new(
            RecordingGyro::default(),
            RecordingAnimator::default(),
            MotionConfig::default(),
        );
        assert_eq!(controller.on_sample(Some(RotationRate::new(1.0, 1.0))), None);
        assert!(controller.animator().requests.is_empty());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut controller = armed_controller();

        controller.stop();
        assert!(!controller.is_armed());
        let stops_after_first = controller.gyro().stops;

        controller.stop();
        assert!(!controller.is_armed());
        assert_eq!(controller.gyro().stops, stops_after_first);
    }

    #[test]
    fn stopped_controller_ignores_samples_but_keeps_offset() {
        let mut controller = armed_controller();
        controller.on_sample(Some(RotationRate::new(1.0, 0.0)));
        controller.stop();

        assert_eq!(controller.on_sample(Some(RotationRate::new(1.0, 0.0))), None);
        assert_eq!(controller.offset(), Some(Point::new(430.0, 0.0)));
    }

    #[test]
    fn resume_continues_from_current_offset() {
        let mut controller = armed_controller();
        controller.on_sample(Some(RotationRate::new(1.0, 0.0)));
        controller.stop();

        controller.resume();
        assert!(controller.is_armed());
        // Offset was not reset to the start position.
        assert_eq!(controller.offset(), Some(Point::new(430.0, 0.0)));
    }

    #[test]
    fn resume_while_idle_is_a_no_op() {
        let mut controller = MotionController::new(
            RecordingGyro::default(),
            RecordingAnimator::default(),
            MotionConfig::default(),
        );
        controller.resume();
        assert!(!controller.is_armed());
        assert!(controller.gyro().starts.is_empty());
    }

    #[test]
    fn rearm_replaces_subscription_and_resets_offset() {
        let mut controller = armed_controller();
        controller.on_sample(Some(RotationRate::new(1.0, 0.0)));

        controller.arm(horizontal_bounds(), Point::new(0.0, 0.0));
        assert_eq!(controller.offset(), Some(Point::ZERO));
        // One stop for the replaced stream, two starts total, one active.
        assert_eq!(controller.gyro().starts.len(), 2);
        assert_eq!(controller.gyro().stops, 1);
        assert!(controller.gyro().is_sampling());
    }

    #[test]
    fn arm_clamps_out_of_range_start() {
        let mut controller = MotionController::new(
            RecordingGyro::default(),
            RecordingAnimator::default(),
            MotionConfig::default(),
        );
        controller.arm(horizontal_bounds(), Point::new(10_000.0, -5.0));
        assert_eq!(controller.offset(), Some(Point::new(600.0, 0.0)));
    }

    #[test]
    fn disarm_clears_state() {
        let mut controller = armed_controller();
        controller.disarm();

        assert!(!controller.is_armed());
        assert_eq!(controller.offset(), None);
        assert_eq!(controller.on_sample(Some(RotationRate::new(1.0, 0.0))), None);
    }

    #[test]
    fn set_bounds_reclamps_live_offset() {
        let mut controller = armed_controller();

        let narrower = PanBounds::compute(
            Size::new(1000.0, 500.0),
            Size::new(800.0, 500.0),
            ScrollMode::Horizontal,
        )
        .unwrap();
        controller.set_bounds(narrower);
        assert_eq!(controller.offset(), Some(Point::new(200.0, 0.0)));
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut controller = armed_controller();
        let info = controller.debug_info();
        assert!(info.armed);
        assert!(info.sampling);
        assert_eq!(info.offset, Some(Point::new(500.0, 0.0)));

        controller.stop();
        let info = controller.debug_info();
        assert!(!info.armed);
        assert!(!info.sampling);
        assert_eq!(info.offset, Some(Point::new(500.0, 0.0)));
    }
}
