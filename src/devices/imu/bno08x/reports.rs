//! BNO08x Raw IMU Report Decoding
//!
//! Decodes the fixed-length report the tracker polls for gyroscope,
//! accelerometer and die temperature data (Report ID 0x15).
//!
//! # Memory Layout (20 bytes)
//!
//! ```text
//! Offset  Size  Description
//! 0-3     4     Report header (not interpreted)
//! 4-5     2     Gyro X (16-bit LE, signed)
//! 6-7     2     Gyro Y (16-bit LE, signed)
//! 8-9     2     Gyro Z (16-bit LE, signed)
//! 10-11   2     Temperature (16-bit LE, signed, 0.5 °C/LSB, 0 = 23 °C)
//! 12-13   2     Accel X (16-bit LE, signed)
//! 14-15   2     Accel Y (16-bit LE, signed)
//! 16-17   2     Accel Z (16-bit LE, signed)
//! 18-19   2     Trailing bytes (not interpreted)
//! ```
//!
//! Gyro and accel values are delivered pre-scaled by the sensor hub: one LSB
//! is one °/s and one m/s² respectively.
//!
//! Decoding is all-or-nothing. A buffer shorter than [`REPORT_LENGTH`] is
//! rejected outright; no partially-filled sample is ever produced.

use core::fmt;
use nalgebra::Vector3;

/// Report ID requested from the sensor hub for raw gyro + temperature data
pub const REPORT_ID_RAW_IMU: u8 = 0x15;

/// Length of the raw IMU report in bytes
pub const REPORT_LENGTH: usize = 20;

/// Byte offset of the first gyro axis
const GYRO_OFFSET: usize = 4;

/// Byte offset of the raw temperature
const TEMPERATURE_OFFSET: usize = 10;

/// Byte offset of the first accelerometer axis
const ACCEL_OFFSET: usize = 12;

/// Report decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Buffer cannot hold the full report layout
    TooShort {
        /// Bytes required by the layout
        expected: usize,
        /// Bytes available
        actual: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TooShort { expected, actual } => {
                write!(f, "report too short: {} of {} bytes", actual, expected)
            }
        }
    }
}

/// Raw sample decoded from one report
///
/// Values are exactly as delivered by the sensor, before any axis remapping
/// or bias correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    /// Angular rate X, Y, Z (°/s per LSB)
    pub gyro: [i16; 3],
    /// Linear acceleration X, Y, Z (m/s² per LSB)
    pub accel: [i16; 3],
    /// Die temperature (0.5 °C per LSB, 0 = 23 °C)
    pub temperature: i16,
}

impl RawSample {
    /// Decode a raw report
    ///
    /// # Arguments
    ///
    /// * `report` - Report bytes (at least [`REPORT_LENGTH`]; extra bytes ignored)
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TooShort`] if the buffer cannot hold the layout.
    pub fn decode(report: &[u8]) -> Result<Self, DecodeError> {
        if report.len() < REPORT_LENGTH {
            return Err(DecodeError::TooShort {
                expected: REPORT_LENGTH,
                actual: report.len(),
            });
        }

        Ok(Self {
            gyro: read_i16_triplet(report, GYRO_OFFSET),
            accel: read_i16_triplet(report, ACCEL_OFFSET),
            temperature: read_i16(report, TEMPERATURE_OFFSET),
        })
    }

    /// Angular rate as a float vector (°/s)
    pub fn angular_rate_dps(&self) -> Vector3<f32> {
        Vector3::new(
            self.gyro[0] as f32,
            self.gyro[1] as f32,
            self.gyro[2] as f32,
        )
    }

    /// Linear acceleration as a float vector (m/s²)
    pub fn acceleration(&self) -> Vector3<f32> {
        Vector3::new(
            self.accel[0] as f32,
            self.accel[1] as f32,
            self.accel[2] as f32,
        )
    }
}

#[inline]
fn read_i16(buf: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([buf[offset], buf[offset + 1]])
}

#[inline]
fn read_i16_triplet(buf: &[u8], offset: usize) -> [i16; 3] {
    [
        read_i16(buf, offset),
        read_i16(buf, offset + 2),
        read_i16(buf, offset + 4),
    ]
}
