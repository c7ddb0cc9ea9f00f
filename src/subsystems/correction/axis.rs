//! Accelerometer axis remapping
//!
//! The sensor is mounted rotated 90° about its X axis relative to the tracker
//! body frame. The remap is a signed axis permutation, not a float rotation,
//! so it is exact for every input.

use nalgebra::Vector3;

/// Rotate a sensor-frame acceleration vector into the body frame
///
/// `(x, y, z) -> (x, z, -y)`
///
/// Must be applied exactly once per sample.
#[inline]
pub fn remap(accel: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(accel.x, accel.z, -accel.y)
}
