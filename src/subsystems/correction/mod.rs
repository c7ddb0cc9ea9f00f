//! IMU sensor correction
//!
//! Turns raw BNO08x reports into body-frame samples the fusion filter can
//! consume:
//!
//! - [`axis`]: fixed 90° remap of the accelerometer about sensor X
//! - [`thermal`]: first-sample baseline and linear temperature bias model
//! - [`pipeline`]: decode → remap → bias correction → unit conversion
//!
//! ## Usage
//!
//! ```ignore
//! use tracker_imu::subsystems::correction::CorrectionPipeline;
//!
//! let mut pipeline = CorrectionPipeline::new();
//! if let Ok(sample) = pipeline.process(&report) {
//!     let input = sample.to_filter_input(None);
//!     filter.update(&input);
//! }
//! ```

pub mod axis;
pub mod pipeline;
pub mod thermal;

pub use axis::remap;
pub use pipeline::{CorrectedSample, CorrectionPipeline};
pub use thermal::{
    raw_to_celsius, CalibrationState, ThermalBiasCalibrator, GYRO_TEMP_COEFF_DPS_PER_C,
};
