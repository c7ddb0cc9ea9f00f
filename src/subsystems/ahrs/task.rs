//! Temperature-compensated orientation update
//!
//! One call to [`TempCompensatedAhrs::update`] is one control-loop cycle:
//!
//! 1. Read a raw report from the sensor (blocking, bounded by the bus timeout)
//! 2. Decode, remap and bias-correct it
//! 3. Feed the fusion filter
//! 4. Forward temperature / orientation to the debug sink, if any
//!
//! A failed or short read skips the rest of the cycle: the calibration
//! baseline is not touched and the filter sees nothing.

use super::traits::{DebugSink, FusionFilter, NoSink};
use crate::devices::imu::bno08x::REPORT_LENGTH;
use crate::devices::traits::{ReportSource, SampleError};
use crate::subsystems::correction::CorrectionPipeline;
use crate::{log_debug, log_info, log_warn};
use nalgebra::{Quaternion, Vector3};

/// Consecutive skipped cycles before a warning is logged
const SKIP_WARN_THRESHOLD: u32 = 100;

/// Update cycle configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TempCompensatedAhrsConfig {
    /// Forward each sample's temperature to the debug sink
    pub report_temperature: bool,
}

/// Report source + correction pipeline + fusion filter
///
/// # Type Parameters
///
/// * `R` - Raw report source (usually [`Bno08xReportReader`](crate::devices::imu::bno08x::Bno08xReportReader))
/// * `F` - Fusion filter
/// * `S` - Debug sink ([`NoSink`] unless set with [`with_sink`](Self::with_sink))
pub struct TempCompensatedAhrs<R, F, S = NoSink> {
    source: R,
    filter: F,
    sink: S,
    pipeline: CorrectionPipeline,
    config: TempCompensatedAhrsConfig,
    orientation: Option<Quaternion<f32>>,
    skipped_cycles: u32,
    consecutive_skips: u32,
}

impl<R: ReportSource, F: FusionFilter> TempCompensatedAhrs<R, F, NoSink> {
    /// Create an update cycle with no debug sink
    pub fn new(source: R, filter: F, config: TempCompensatedAhrsConfig) -> Self {
        Self {
            source,
            filter,
            sink: NoSink,
            pipeline: CorrectionPipeline::new(),
            config,
            orientation: None,
            skipped_cycles: 0,
            consecutive_skips: 0,
        }
    }
}

impl<R: ReportSource, F: FusionFilter, S: DebugSink> TempCompensatedAhrs<R, F, S> {
    /// Attach a debug sink
    pub fn with_sink<S2: DebugSink>(self, sink: S2) -> TempCompensatedAhrs<R, F, S2> {
        TempCompensatedAhrs {
            source: self.source,
            filter: self.filter,
            sink,
            pipeline: self.pipeline,
            config: self.config,
            orientation: self.orientation,
            skipped_cycles: self.skipped_cycles,
            consecutive_skips: self.consecutive_skips,
        }
    }

    /// Run one cycle without magnetometer data
    pub fn update(&mut self) -> Result<Quaternion<f32>, SampleError> {
        self.update_with_mag(None)
    }

    /// Run one cycle
    ///
    /// # Arguments
    ///
    /// * `mag` - Magnetic field (body frame), zero-filled if `None`
    ///
    /// # Errors
    ///
    /// Returns [`SampleError`] when no sample was produced this cycle. The
    /// error is not fatal; call again on the next cycle.
    pub fn update_with_mag(
        &mut self,
        mag: Option<Vector3<f32>>,
    ) -> Result<Quaternion<f32>, SampleError> {
        match self.run_cycle(mag) {
            Ok(orientation) => {
                self.consecutive_skips = 0;
                Ok(orientation)
            }
            Err(err) => {
                self.skipped_cycles = self.skipped_cycles.saturating_add(1);
                self.consecutive_skips = self.consecutive_skips.saturating_add(1);
                if self.consecutive_skips == SKIP_WARN_THRESHOLD {
                    log_warn!(
                        "IMU: {} consecutive cycles without a sample, last: {}",
                        SKIP_WARN_THRESHOLD,
                        err
                    );
                } else {
                    log_debug!("IMU: cycle skipped: {}", err);
                }
                Err(err)
            }
        }
    }

    fn run_cycle(&mut self, mag: Option<Vector3<f32>>) -> Result<Quaternion<f32>, SampleError> {
        let mut report = [0u8; REPORT_LENGTH];
        self.source.read_report(&mut report)?;

        let was_calibrated = self.pipeline.calibrator().is_calibrated();
        let sample = self.pipeline.process(&report)?;
        if !was_calibrated {
            log_info!(
                "IMU: gyro thermal baseline captured at {} C",
                sample.temperature_c()
            );
        }

        if self.config.report_temperature {
            self.sink.report_temperature(sample.temperature_c());
        }

        let orientation = self.filter.update(&sample.to_filter_input(mag));
        self.sink.report_orientation(&orientation);
        self.orientation = Some(orientation);

        Ok(orientation)
    }

    /// Last orientation produced by the filter
    pub fn orientation(&self) -> Option<Quaternion<f32>> {
        self.orientation
    }

    /// Correction pipeline (read-only, for calibration inspection)
    pub fn pipeline(&self) -> &CorrectionPipeline {
        &self.pipeline
    }

    /// Total cycles that produced no sample
    pub fn skipped_cycles(&self) -> u32 {
        self.skipped_cycles
    }

    /// Get reference to the fusion filter
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Get reference to the debug sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the cycle and return the report source, filter and sink
    pub fn into_parts(self) -> (R, F, S) {
        (self.source, self.filter, self.sink)
    }
}
