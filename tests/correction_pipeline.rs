//! End-to-end tests through the public API
//!
//! A scripted I2C bus serves report bytes; a recording filter captures what
//! the update cycle hands to the fusion stage.

use nalgebra::{Quaternion, Vector3};
use std::collections::VecDeque;
use std::f32::consts::PI;
use tracker_imu::devices::imu::bno08x::{
    Bno08xReportReader, RawSample, REPORT_ID_RAW_IMU, REPORT_LENGTH,
};
use tracker_imu::devices::traits::{BusError, SampleError};
use tracker_imu::parameters::{ImuCorrectionParams, ParamValue, ParameterStore};
use tracker_imu::platform::{I2cError, I2cInterface, PlatformError, Result};
use tracker_imu::subsystems::ahrs::{DebugSink, FilterInput, FusionFilter, TempCompensatedAhrs};
use tracker_imu::subsystems::correction::{CorrectionPipeline, GYRO_TEMP_COEFF_DPS_PER_C};

const EPSILON: f32 = 1e-5;

/// One scripted response to a read
enum Response {
    Report(Vec<u8>),
    Fail(I2cError),
}

#[derive(Default)]
struct ScriptedBus {
    responses: VecDeque<Response>,
    writes: Vec<(u8, Vec<u8>)>,
    frequency: u32,
}

impl ScriptedBus {
    fn push_report(&mut self, bytes: &[u8]) {
        self.responses.push_back(Response::Report(bytes.to_vec()));
    }

    fn push_failure(&mut self, error: I2cError) {
        self.responses.push_back(Response::Fail(error));
    }
}

impl I2cInterface for ScriptedBus {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.writes.push((addr, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _addr: u8, buffer: &mut [u8]) -> Result<usize> {
        match self.responses.pop_front() {
            Some(Response::Report(bytes)) => {
                let len = bytes.len().min(buffer.len());
                buffer[..len].copy_from_slice(&bytes[..len]);
                Ok(len)
            }
            Some(Response::Fail(error)) => Err(PlatformError::I2c(error)),
            None => Err(PlatformError::I2c(I2cError::Nack)),
        }
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<usize> {
        self.write(addr, write_data)?;
        self.read(addr, read_buffer)
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.frequency = frequency;
        Ok(())
    }
}

#[derive(Default)]
struct RecordingFilter {
    inputs: Vec<FilterInput>,
}

impl FusionFilter for RecordingFilter {
    fn update(&mut self, input: &FilterInput) -> Quaternion<f32> {
        self.inputs.push(*input);
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }
}

#[derive(Default)]
struct RecordingSink {
    temperatures: Vec<f32>,
    orientations: Vec<Quaternion<f32>>,
}

impl DebugSink for RecordingSink {
    fn report_temperature(&mut self, celsius: f32) {
        self.temperatures.push(celsius);
    }

    fn report_orientation(&mut self, orientation: &Quaternion<f32>) {
        self.orientations.push(*orientation);
    }
}

fn report(gyro: [i16; 3], temperature: i16, accel: [i16; 3]) -> [u8; REPORT_LENGTH] {
    let mut bytes = [0u8; REPORT_LENGTH];
    bytes[0] = REPORT_ID_RAW_IMU;
    for (i, v) in gyro.iter().enumerate() {
        bytes[4 + 2 * i..6 + 2 * i].copy_from_slice(&v.to_le_bytes());
    }
    bytes[10..12].copy_from_slice(&temperature.to_le_bytes());
    for (i, v) in accel.iter().enumerate() {
        bytes[12 + 2 * i..14 + 2 * i].copy_from_slice(&v.to_le_bytes());
    }
    bytes
}

#[test]
fn first_report_calibrates_and_passes_gyro_through() {
    let mut pipeline = CorrectionPipeline::new();
    let sample = pipeline
        .process(&report([100, -50, 0], 4, [10, 20, 30]))
        .unwrap();

    assert_eq!(sample.acceleration(), Vector3::new(10.0, 30.0, -20.0));
    let gyro = sample.angular_rate_rad_s();
    assert!((gyro.x - 1.745_329_3).abs() < EPSILON);
    assert!((gyro.y + 0.872_664_6).abs() < EPSILON);
    assert_eq!(gyro.z, 0.0);
    assert_eq!(pipeline.calibrator().baseline_temperature(), Some(25.0));
}

#[test]
fn decode_rejects_short_buffer() {
    let bytes = report([1, 2, 3], 0, [4, 5, 6]);
    assert!(RawSample::decode(&bytes[..18]).is_err());
    assert!(RawSample::decode(&bytes[..19]).is_err());
    assert!(RawSample::decode(&bytes).is_ok());
}

#[test]
fn update_cycle_over_scripted_bus() {
    let mut store = ParameterStore::new();
    ImuCorrectionParams::register_defaults(&mut store).unwrap();
    store.set("IMU_DBG_TEMP", ParamValue::Bool(true)).unwrap();
    let params = ImuCorrectionParams::from_store(&store);

    let mut bus = ScriptedBus::default();
    bus.set_frequency(params.i2c_config().frequency).unwrap();
    bus.push_report(&report([0, 0, 0], 4, [0, 0, 100]));
    bus.push_failure(I2cError::Timeout);
    bus.push_report(&report([0, 0, 0], 24, [0, 0, 100])[..12]);
    bus.push_report(&report([10, 10, 10], 24, [0, 0, 100]));

    let mut sink = RecordingSink::default();
    let mut filter = RecordingFilter::default();
    {
        let reader = Bno08xReportReader::new(&mut bus, params.reader_config());
        let mut ahrs = TempCompensatedAhrs::new(reader, &mut filter, params.ahrs_config())
            .with_sink(&mut sink);

        assert!(ahrs.update().is_ok());
        assert_eq!(
            ahrs.update(),
            Err(SampleError::Bus(BusError::Transaction(I2cError::Timeout)))
        );
        assert_eq!(
            ahrs.update(),
            Err(SampleError::Bus(BusError::ShortRead {
                expected: REPORT_LENGTH,
                received: 12
            }))
        );
        assert!(ahrs.update().is_ok());

        assert_eq!(ahrs.skipped_cycles(), 2);
        assert_eq!(
            ahrs.pipeline().calibrator().baseline_temperature(),
            Some(25.0)
        );
    }

    assert_eq!(bus.frequency, 400_000);
    assert_eq!(bus.writes.len(), 4);
    assert!(bus
        .writes
        .iter()
        .all(|(addr, data)| *addr == 0x4A && data.as_slice() == [REPORT_ID_RAW_IMU]));

    // Only the two good cycles reach the filter and the sink
    assert_eq!(filter.inputs.len(), 2);
    assert_eq!(sink.temperatures, vec![25.0, 35.0]);
    assert_eq!(sink.orientations.len(), 2);

    let first = filter.inputs[0];
    assert_eq!(first.gyro, Vector3::zeros());
    assert_eq!(first.accel, Vector3::new(0.0, 100.0, 0.0));
    assert_eq!(first.mag, Vector3::zeros());

    // 35 °C against a 25 °C baseline
    let expected = (10.0 - GYRO_TEMP_COEFF_DPS_PER_C * 10.0) * PI / 180.0;
    for axis in filter.inputs[1].gyro.iter() {
        assert!((axis - expected).abs() < EPSILON);
    }
}

#[test]
fn failures_before_first_report_do_not_calibrate() {
    let mut bus = ScriptedBus::default();
    bus.push_failure(I2cError::BusError);
    bus.push_report(&[0u8; 5]);
    bus.push_report(&report([0, 0, 0], -10, [0, 0, 0]));

    let reader = Bno08xReportReader::new(&mut bus, Default::default());
    let mut ahrs = TempCompensatedAhrs::new(reader, RecordingFilter::default(), Default::default());

    assert!(ahrs.update().is_err());
    assert!(ahrs.update().is_err());
    assert!(!ahrs.pipeline().calibrator().is_calibrated());
    assert_eq!(ahrs.orientation(), None);

    ahrs.update().unwrap();
    assert_eq!(
        ahrs.pipeline().calibrator().baseline_temperature(),
        Some(18.0)
    );
    assert_eq!(ahrs.filter().inputs.len(), 1);
}
