// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One angular-rate sample from the motion sensor.
///
/// Rates are in the sensor's native units (typically radians per second).
/// Yaw maps to horizontal pan and pitch to vertical pan; the sign convention
/// follows the integration rule `offset -= rate * speed`, so a positive yaw
/// pans the viewport left.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RotationRate {
    /// Rotation rate about the vertical axis (horizontal pan).
    pub yaw: f64,
    /// Rotation rate about the lateral axis (vertical pan).
    pub pitch: f64,
}

impl RotationRate {
    /// Creates a sample from yaw and pitch rates.
    #[must_use]
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }
}

/// Tuning knobs for the motion controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Multiplier applied to angular rates before integration, in pixels per
    /// rate unit.
    pub speed: f64,
    /// Sampling interval requested from the [`crate::GyroSource`], in seconds.
    pub sample_interval: f64,
    /// Duration of each requested viewport transition, in seconds.
    pub transition_duration: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 70.0,
            sample_interval: 0.1,
            transition_duration: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MotionConfig, RotationRate};

    #[test]
    fn default_config_matches_documented_values() {
        let config = MotionConfig::default();
        assert_eq!(config.speed, 70.0);
        assert_eq!(config.sample_interval, 0.1);
        assert_eq!(config.transition_duration, 0.5);
    }

    #[test]
    fn default_sample_is_at_rest() {
        assert_eq!(RotationRate::default(), RotationRate::new(0.0, 0.0));
    }
}
