//! Temperature-compensated gyro bias
//!
//! Gyro zero-rate output drifts roughly linearly with die temperature. The
//! calibrator captures the temperature of the first sample it sees as the
//! zero-drift reference, then subtracts `coeff * (T - T_baseline)` from every
//! following sample.
//!
//! The baseline is relative: it does not assume the tracker is still at power
//! on, and it does not estimate the absolute bias. Once captured it never
//! changes for the lifetime of the calibrator.
//!
//! # Temperature Scale
//!
//! ```text
//! T(°C) = 23.0 + 0.5 * raw
//! ```

use nalgebra::Vector3;

/// Gyro bias drift per degree Celsius (°/s per °C), BMI055-class gyro
pub const GYRO_TEMP_COEFF_DPS_PER_C: f32 = 0.015;

/// Temperature at raw value 0 (°C)
const TEMP_OFFSET_C: f32 = 23.0;

/// Temperature per raw LSB (°C)
const TEMP_SCALE_C_PER_LSB: f32 = 0.5;

/// Convert a raw temperature reading to degrees Celsius
#[inline]
pub fn raw_to_celsius(raw: i16) -> f32 {
    TEMP_OFFSET_C + TEMP_SCALE_C_PER_LSB * raw as f32
}

/// Calibration baseline
///
/// Starts uncalibrated. [`ThermalBiasCalibrator`] fills it in from the first
/// sample; after that it is read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationState {
    /// Temperature at which the baseline was captured (°C)
    baseline_temp_c: f32,
    /// Bias at the baseline temperature (°/s)
    baseline_bias: Vector3<f32>,
    /// Whether the baseline has been captured
    calibrated: bool,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            baseline_temp_c: TEMP_OFFSET_C,
            baseline_bias: Vector3::zeros(),
            calibrated: false,
        }
    }
}

impl CalibrationState {
    /// Baseline temperature (°C)
    pub fn baseline_temp_c(&self) -> f32 {
        self.baseline_temp_c
    }

    /// Baseline bias per axis (°/s)
    pub fn baseline_bias(&self) -> Vector3<f32> {
        self.baseline_bias
    }

    /// Whether the baseline has been captured
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Capture the baseline if not already captured
    fn capture(&mut self, temp_c: f32) {
        if self.calibrated {
            return;
        }
        self.baseline_temp_c = temp_c;
        self.baseline_bias = Vector3::zeros();
        self.calibrated = true;
    }

    /// Bias predicted at `temp_c` for the given per-axis coefficients (°/s)
    pub fn current_bias(&self, temp_c: f32, coeff: &Vector3<f32>) -> Vector3<f32> {
        let dt = temp_c - self.baseline_temp_c;
        self.baseline_bias + coeff * dt
    }
}

/// Gyro bias calibrator
///
/// Owns the [`CalibrationState`]. Access is through `&mut self`, so a single
/// owner serializes every update.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use tracker_imu::subsystems::correction::ThermalBiasCalibrator;
///
/// let mut calibrator = ThermalBiasCalibrator::new();
///
/// // First sample at 25 °C establishes the baseline and passes through
/// let gyro = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(calibrator.correct(gyro, 4), gyro);
/// assert!(calibrator.is_calibrated());
/// ```
#[derive(Debug, Clone)]
pub struct ThermalBiasCalibrator {
    state: CalibrationState,
    /// Bias drift per °C for each axis (°/s per °C)
    temp_coeff: Vector3<f32>,
}

impl Default for ThermalBiasCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl ThermalBiasCalibrator {
    /// Create an uncalibrated calibrator
    ///
    /// All three axes share [`GYRO_TEMP_COEFF_DPS_PER_C`].
    pub fn new() -> Self {
        Self {
            state: CalibrationState::default(),
            temp_coeff: Vector3::repeat(GYRO_TEMP_COEFF_DPS_PER_C),
        }
    }

    /// Current calibration state
    pub fn state(&self) -> &CalibrationState {
        &self.state
    }

    /// Whether the baseline has been captured
    pub fn is_calibrated(&self) -> bool {
        self.state.is_calibrated()
    }

    /// Baseline temperature (°C), once calibrated
    pub fn baseline_temperature(&self) -> Option<f32> {
        self.state
            .is_calibrated()
            .then_some(self.state.baseline_temp_c())
    }

    /// Per-axis temperature coefficients (°/s per °C)
    pub fn temp_coeff(&self) -> Vector3<f32> {
        self.temp_coeff
    }

    /// Remove temperature-induced bias from a gyro sample
    ///
    /// # Arguments
    ///
    /// * `raw_gyro` - Angular rate (°/s)
    /// * `raw_temperature` - Raw temperature reading from the same report
    ///
    /// # Returns
    ///
    /// Corrected angular rate (°/s). The first call captures the baseline and
    /// returns `raw_gyro` unchanged.
    pub fn correct(&mut self, raw_gyro: Vector3<f32>, raw_temperature: i16) -> Vector3<f32> {
        let temp_c = raw_to_celsius(raw_temperature);
        self.state.capture(temp_c);

        raw_gyro - self.state.current_bias(temp_c, &self.temp_coeff)
    }
}
