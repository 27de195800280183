// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use parallax_layout::{PanBounds, ScrollMode, StartAnchor, start_offset_clamped};
use parallax_motion::{
    GyroSource, MotionConfig, MotionController, MotionDebugInfo, PanAnimator, RotationRate,
};

use crate::fetch::{ByteFetcher, FetchInbox, ImageDecoder};
use crate::image::PanImage;

/// A viewport that shows an image and pans it from gyroscope motion.
///
/// The widget holds exactly one image's pan state at a time. Setting an
/// image runs the full cascade explicitly: compute [`PanBounds`] for the
/// current viewport and [`ScrollMode`], apply the clamped [`StartAnchor`]
/// offset, and arm the motion controller (which replaces any previous sensor
/// subscription). Clearing the image tears it all down again.
///
/// All methods must be called from the owning UI thread; fetch completions
/// from other threads arrive only through [`GyroImageView::pump_fetches`].
#[derive(Debug)]
pub struct GyroImageView<I, G, A> {
    image: Option<I>,
    viewport: Size,
    anchor: StartAnchor,
    mode: ScrollMode,
    controller: MotionController<G, A>,
    inbox: FetchInbox,
}

impl<I: PanImage, G: GyroSource, A: PanAnimator> GyroImageView<I, G, A> {
    /// Creates a widget with default configuration and no image.
    ///
    /// Defaults: [`StartAnchor::Middle`], [`ScrollMode::Horizontal`], speed
    /// `70.0`, sample interval `0.1`s, transition duration `0.5`s. The
    /// viewport starts at zero size until the host's first
    /// [`GyroImageView::set_viewport`].
    #[must_use]
    pub fn new(gyro: G, animator: A) -> Self {
        Self::with_config(gyro, animator, MotionConfig::default())
    }

    /// Creates a widget with an explicit motion configuration.
    #[must_use]
    pub fn with_config(gyro: G, animator: A, config: MotionConfig) -> Self {
        Self {
            image: None,
            viewport: Size::ZERO,
            anchor: StartAnchor::default(),
            mode: ScrollMode::default(),
            controller: MotionController::new(gyro, animator, config),
            inbox: FetchInbox::new(),
        }
    }

    /// Sets or clears the image, running the re-layout → start-offset → arm
    /// cascade.
    ///
    /// An image with a non-positive dimension is silently rejected and the
    /// widget keeps its prior state; no error surfaces to the host. `None`
    /// stops sampling and clears all pan state.
    pub fn set_image(&mut self, image: Option<I>) {
        match image {
            Some(image) => {
                self.apply_image(image);
            }
            None => {
                self.controller.disarm();
                self.image = None;
            }
        }
    }

    /// Runs the re-layout → start-offset → arm cascade for `image`.
    ///
    /// Returns `false` when the image was rejected (non-positive dimension)
    /// and nothing changed.
    fn apply_image(&mut self, image: I) -> bool {
        let Ok(bounds) = PanBounds::compute(image.size(), self.viewport, self.mode) else {
            return false;
        };
        let start = start_offset_clamped(self.anchor, &bounds, self.viewport);
        self.image = Some(image);
        self.controller.arm(bounds, start);
        true
    }

    /// Starts fetching an image from `url`.
    ///
    /// The fetch outcome is delivered through the widget's inbox; call
    /// [`GyroImageView::pump_fetches`] from the UI thread to apply it. A new
    /// request supersedes any still-pending one (its completion will be
    /// discarded). A failed fetch changes nothing.
    pub fn request_image<F: ByteFetcher>(&mut self, url: &str, fetcher: &mut F) {
        let reply = self.inbox.new_request();
        fetcher.fetch(url, reply);
    }

    /// Drains pending fetch completions and applies the newest one.
    ///
    /// Returns `true` only when a fetched image was decoded and actually
    /// set. Failed fetches, stale completions, decode errors, and decoded
    /// images with invalid dimensions all leave the widget unchanged and
    /// return `false`.
    pub fn pump_fetches<D: ImageDecoder<I>>(&mut self, decoder: &D) -> bool {
        let Some(bytes) = self.inbox.drain_current() else {
            return false;
        };
        match decoder.decode(&bytes) {
            Ok(image) => self.apply_image(image),
            Err(_) => false,
        }
    }

    /// Updates the viewport size (host layout/resize event).
    ///
    /// Bounds are recomputed for the current image and the live offset is
    /// re-clamped; the start anchor is not re-applied.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.relayout();
    }

    /// Switches between horizontal-only and full panning.
    ///
    /// Bounds are recomputed for the current image; in
    /// [`ScrollMode::Horizontal`] the vertical offset collapses to zero.
    pub fn set_scroll_mode(&mut self, mode: ScrollMode) {
        self.mode = mode;
        self.relayout();
    }

    /// Sets the anchor used the next time an image loads.
    pub fn set_start_anchor(&mut self, anchor: StartAnchor) {
        self.anchor = anchor;
    }

    /// Sets the pan speed multiplier. Non-positive values are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed <= 0.0 {
            return;
        }
        let mut config = self.controller.config();
        config.speed = speed;
        self.controller.set_config(config);
    }

    /// Replaces the whole motion configuration.
    pub fn set_motion_config(&mut self, config: MotionConfig) {
        self.controller.set_config(config);
    }

    /// Restarts motion updates against the current offset.
    ///
    /// A no-op when no image is set; only an image load applies the start
    /// anchor again.
    pub fn start_motion(&mut self) {
        self.controller.resume();
    }

    /// Stops motion updates. Idempotent; the offset is kept for a later
    /// [`GyroImageView::start_motion`].
    pub fn stop_motion(&mut self) {
        self.controller.stop();
    }

    /// Forwards one sensor delivery; returns the new offset when a sample
    /// was integrated.
    pub fn on_sample(&mut self, sample: Option<RotationRate>) -> Option<Point> {
        self.controller.on_sample(sample)
    }

    /// Returns the current image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Returns the current pan offset, if an image is set.
    #[must_use]
    pub fn offset(&self) -> Option<Point> {
        self.controller.offset()
    }

    /// Returns the current pan bounds, if an image is set.
    #[must_use]
    pub fn bounds(&self) -> Option<PanBounds> {
        self.controller.bounds()
    }

    /// Returns the current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the configured start anchor.
    #[must_use]
    pub fn start_anchor(&self) -> StartAnchor {
        self.anchor
    }

    /// Returns the configured scroll mode.
    #[must_use]
    pub fn scroll_mode(&self) -> ScrollMode {
        self.mode
    }

    /// Returns the motion configuration.
    #[must_use]
    pub fn motion_config(&self) -> MotionConfig {
        self.controller.config()
    }

    /// Returns `true` while gyro samples are being integrated.
    #[must_use]
    pub fn is_motion_active(&self) -> bool {
        self.controller.is_armed()
    }

    /// Snapshot of the motion controller state for debugging.
    #[must_use]
    pub fn motion_debug_info(&self) -> MotionDebugInfo {
        self.controller.debug_info()
    }

    fn relayout(&mut self) {
        let Some(image) = self.image.as_ref() else {
            return;
        };
        // The image was validated when set, so compute can only fail if the
        // host mutated the handle's reported size to something invalid;
        // treat that like any other invalid image and keep the prior bounds.
        if let Ok(bounds) = PanBounds::compute(image.size(), self.viewport, self.mode) {
            self.controller.set_bounds(bounds);
        }
    }
}
