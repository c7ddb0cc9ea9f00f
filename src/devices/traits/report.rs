//! Raw Report Source Trait
//!
//! Device-independent interface for sources that deliver fixed-length raw IMU
//! reports, consumed by the temperature-compensated update cycle.
//!
//! ## Usage
//!
//! ```ignore
//! use tracker_imu::devices::traits::ReportSource;
//! use tracker_imu::devices::imu::bno08x::REPORT_LENGTH;
//!
//! fn poll<R: ReportSource>(source: &mut R) {
//!     let mut report = [0u8; REPORT_LENGTH];
//!     if source.read_report(&mut report).is_ok() {
//!         // decode and correct
//!     }
//! }
//! ```

use crate::devices::imu::bno08x::{DecodeError, REPORT_LENGTH};
use crate::platform::{I2cError, PlatformError};
use core::fmt;

/// Bus transaction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The transaction itself failed (NACK, timeout, bus fault)
    Transaction(I2cError),

    /// The device returned fewer bytes than the report requires
    ShortRead {
        /// Bytes requested
        expected: usize,
        /// Bytes delivered
        received: usize,
    },

    /// Platform reported a non-bus failure
    Platform,
}

impl From<PlatformError> for BusError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::I2c(e) => BusError::Transaction(e),
            PlatformError::InvalidConfig | PlatformError::ResourceUnavailable => {
                BusError::Platform
            }
        }
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Transaction(e) => write!(f, "bus transaction failed: {}", e),
            BusError::ShortRead { expected, received } => {
                write!(f, "short read: {} of {} bytes", received, expected)
            }
            BusError::Platform => write!(f, "platform failure"),
        }
    }
}

/// Reasons a control-loop cycle produced no sample
///
/// Neither variant is fatal: the cycle is skipped and the next one proceeds
/// normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Reading the report from the bus failed
    Bus(BusError),
    /// The report bytes could not be decoded
    Decode(DecodeError),
}

impl From<BusError> for SampleError {
    fn from(err: BusError) -> Self {
        SampleError::Bus(err)
    }
}

impl From<DecodeError> for SampleError {
    fn from(err: DecodeError) -> Self {
        SampleError::Decode(err)
    }
}

impl From<PlatformError> for SampleError {
    fn from(err: PlatformError) -> Self {
        SampleError::Bus(err.into())
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Bus(e) => write!(f, "{}", e),
            SampleError::Decode(e) => write!(f, "{}", e),
        }
    }
}

/// Source of fixed-length raw IMU reports
///
/// Implementations perform one blocking bus read per call. On success the
/// whole buffer holds a fresh report; on failure its contents are
/// unspecified and must not be decoded.
pub trait ReportSource {
    /// Read one complete report into `report`
    fn read_report(&mut self, report: &mut [u8; REPORT_LENGTH]) -> Result<(), BusError>;
}

impl<T: ReportSource + ?Sized> ReportSource for &mut T {
    fn read_report(&mut self, report: &mut [u8; REPORT_LENGTH]) -> Result<(), BusError> {
        (**self).read_report(report)
    }
}
