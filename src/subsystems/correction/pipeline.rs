//! Correction pipeline
//!
//! Single entry point from raw report bytes to a corrected sample:
//!
//! ```text
//! report bytes ──decode──► RawSample
//!                              │
//!              accel ──remap──►│
//!              gyro ──thermal──►│
//!                              ▼
//!                        CorrectedSample ──► FilterInput (rad/s)
//! ```
//!
//! Raw and partially-corrected values never leave this module, so neither
//! the remap nor the bias subtraction can be applied twice.

use super::axis::remap;
use super::thermal::{raw_to_celsius, ThermalBiasCalibrator};
use crate::devices::imu::bno08x::{DecodeError, RawSample};
use crate::subsystems::ahrs::FilterInput;
use core::f32::consts::PI;
use nalgebra::Vector3;

/// Degrees to radians
const DEG_TO_RAD: f32 = PI / 180.0;

/// Fully corrected IMU sample in the body frame
///
/// Only the pipeline creates these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedSample {
    angular_rate_dps: Vector3<f32>,
    acceleration: Vector3<f32>,
    temperature_c: f32,
}

impl CorrectedSample {
    /// Bias-corrected angular rate (°/s)
    pub fn angular_rate_dps(&self) -> Vector3<f32> {
        self.angular_rate_dps
    }

    /// Bias-corrected angular rate (rad/s)
    pub fn angular_rate_rad_s(&self) -> Vector3<f32> {
        self.angular_rate_dps * DEG_TO_RAD
    }

    /// Remapped linear acceleration (m/s²)
    pub fn acceleration(&self) -> Vector3<f32> {
        self.acceleration
    }

    /// Die temperature of this sample (°C)
    pub fn temperature_c(&self) -> f32 {
        self.temperature_c
    }

    /// Package for the fusion filter
    ///
    /// `mag` is zero-filled when no magnetometer reading is available.
    pub fn to_filter_input(&self, mag: Option<Vector3<f32>>) -> FilterInput {
        FilterInput {
            gyro: self.angular_rate_rad_s(),
            accel: self.acceleration,
            mag: mag.unwrap_or_else(Vector3::zeros),
        }
    }
}

/// Raw report to corrected sample
///
/// Owns the thermal calibrator, and with it the calibration baseline.
#[derive(Debug, Clone, Default)]
pub struct CorrectionPipeline {
    calibrator: ThermalBiasCalibrator,
}

impl CorrectionPipeline {
    /// Create a pipeline with an uncalibrated calibrator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline around an existing calibrator
    pub fn with_calibrator(calibrator: ThermalBiasCalibrator) -> Self {
        Self { calibrator }
    }

    /// Thermal calibrator (read-only)
    pub fn calibrator(&self) -> &ThermalBiasCalibrator {
        &self.calibrator
    }

    /// Decode and correct one raw report
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the report is too short. The calibration
    /// state is left untouched in that case.
    pub fn process(&mut self, raw_report: &[u8]) -> Result<CorrectedSample, DecodeError> {
        let raw = RawSample::decode(raw_report)?;
        Ok(self.correct(raw))
    }

    fn correct(&mut self, raw: RawSample) -> CorrectedSample {
        let acceleration = remap(raw.acceleration());
        let angular_rate_dps = self
            .calibrator
            .correct(raw.angular_rate_dps(), raw.temperature);

        CorrectedSample {
            angular_rate_dps,
            acceleration,
            temperature_c: raw_to_celsius(raw.temperature),
        }
    }
}
