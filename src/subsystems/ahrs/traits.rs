//! Fusion filter and debug sink traits
//!
//! The orientation-fusion algorithm (VQF, Madgwick, Mahony, ...) is an
//! external collaborator. This module only fixes the shape of the hand-off:
//! corrected angular rate in rad/s, body-frame linear acceleration and an
//! optional magnetic field in, a unit quaternion out.

use nalgebra::{Quaternion, Vector3};

/// One corrected sample in the units the fusion filter expects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterInput {
    /// Angular rate, body frame (rad/s)
    pub gyro: Vector3<f32>,
    /// Linear acceleration, body frame (m/s², includes gravity)
    pub accel: Vector3<f32>,
    /// Magnetic field, body frame; all zeros when unavailable
    pub mag: Vector3<f32>,
}

/// Orientation fusion filter
///
/// Implementations integrate one corrected sample per call and return the
/// updated orientation as a scalar-first unit quaternion (w, x, y, z).
pub trait FusionFilter {
    /// Integrate one sample and return the new orientation
    fn update(&mut self, input: &FilterInput) -> Quaternion<f32>;
}

impl<T: FusionFilter + ?Sized> FusionFilter for &mut T {
    fn update(&mut self, input: &FilterInput) -> Quaternion<f32> {
        (**self).update(input)
    }
}

/// Optional debug telemetry sink
///
/// Injected by the caller; the correction core never creates one. Both
/// methods default to no-ops so sinks implement only what they forward.
pub trait DebugSink {
    /// Corrected sample temperature (°C)
    fn report_temperature(&mut self, _celsius: f32) {}

    /// Latest fused orientation (w, x, y, z)
    fn report_orientation(&mut self, _orientation: &Quaternion<f32>) {}
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSink;

impl DebugSink for NoSink {}

impl<T: DebugSink + ?Sized> DebugSink for &mut T {
    fn report_temperature(&mut self, celsius: f32) {
        (**self).report_temperature(celsius)
    }

    fn report_orientation(&mut self, orientation: &Quaternion<f32>) {
        (**self).report_orientation(orientation)
    }
}
