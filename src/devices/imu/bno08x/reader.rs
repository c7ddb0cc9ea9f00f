//! BNO08x Raw Report Reader
//!
//! Blocking poll of the raw IMU report over I2C.
//!
//! # Transaction
//!
//! 1. START + address + WRITE, report ID (0x15), STOP
//! 2. START + address + READ, [`REPORT_LENGTH`] bytes, STOP
//!
//! Either step failing, or the device delivering fewer than
//! [`REPORT_LENGTH`] bytes, means there is no sample this cycle. The reader
//! does not retry; retry policy belongs to the caller.

use super::reports::{RawSample, REPORT_ID_RAW_IMU, REPORT_LENGTH};
use crate::devices::traits::{BusError, ReportSource, SampleError};
use crate::platform::I2cInterface;

/// Report reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bno08xReaderConfig {
    /// 7-bit I2C device address
    pub address: u8,
}

impl Default for Bno08xReaderConfig {
    fn default() -> Self {
        Self {
            address: Bno08xReportReader::<()>::DEFAULT_ADDRESS,
        }
    }
}

/// Raw IMU report reader
///
/// # Type Parameters
///
/// * `I2C` - I2C bus type implementing [`I2cInterface`]
///
/// # Example
///
/// ```ignore
/// use tracker_imu::devices::imu::bno08x::{Bno08xReportReader, Bno08xReaderConfig};
///
/// let mut reader = Bno08xReportReader::new(i2c, Bno08xReaderConfig::default());
/// let sample = reader.read_sample()?;
/// ```
pub struct Bno08xReportReader<I2C> {
    /// I2C bus instance
    i2c: I2C,
    /// Reader configuration
    config: Bno08xReaderConfig,
}

impl<I2C> Bno08xReportReader<I2C> {
    /// Default BNO08x I2C address (SA0 = low)
    pub const DEFAULT_ADDRESS: u8 = 0x4A;

    /// Alternate BNO08x I2C address (SA0 = high)
    pub const ALTERNATE_ADDRESS: u8 = 0x4B;

    /// Create a new report reader
    pub fn new(i2c: I2C, config: Bno08xReaderConfig) -> Self {
        Self { i2c, config }
    }

    /// Get the I2C address
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cInterface> Bno08xReportReader<I2C> {
    /// Read one report and decode it
    ///
    /// # Errors
    ///
    /// * [`SampleError::Bus`] - transaction failed or short read
    /// * [`SampleError::Decode`] - report bytes could not be decoded
    pub fn read_sample(&mut self) -> Result<RawSample, SampleError> {
        let mut report = [0u8; REPORT_LENGTH];
        self.read_report(&mut report)?;
        Ok(RawSample::decode(&report)?)
    }
}

impl<I2C: I2cInterface> ReportSource for Bno08xReportReader<I2C> {
    fn read_report(&mut self, report: &mut [u8; REPORT_LENGTH]) -> Result<(), BusError> {
        let address = self.config.address;

        self.i2c.write(address, &[REPORT_ID_RAW_IMU])?;

        let received = self.i2c.read(address, report)?;
        if received < REPORT_LENGTH {
            return Err(BusError::ShortRead {
                expected: REPORT_LENGTH,
                received,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c};
    use crate::platform::{I2cConfig, I2cError};

    fn report_bytes() -> [u8; REPORT_LENGTH] {
        let mut report = [0u8; REPORT_LENGTH];
        report[4..6].copy_from_slice(&100i16.to_le_bytes());
        report[6..8].copy_from_slice(&(-50i16).to_le_bytes());
        report[10..12].copy_from_slice(&4i16.to_le_bytes());
        report[12..14].copy_from_slice(&10i16.to_le_bytes());
        report[14..16].copy_from_slice(&20i16.to_le_bytes());
        report[16..18].copy_from_slice(&30i16.to_le_bytes());
        report
    }

    #[test]
    fn test_default_config() {
        let config = Bno08xReaderConfig::default();
        assert_eq!(config.address, 0x4A);
    }

    #[test]
    fn test_read_report_transactions() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&report_bytes());

        let mut reader = Bno08xReportReader::new(&mut i2c, Bno08xReaderConfig::default());
        let mut report = [0u8; REPORT_LENGTH];
        reader.read_report(&mut report).unwrap();
        assert_eq!(report, report_bytes());

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 2);
        assert!(matches!(
            &transactions[0],
            I2cTransaction::Write { addr: 0x4A, data } if data.as_slice() == [REPORT_ID_RAW_IMU]
        ));
        assert_eq!(
            transactions[1],
            I2cTransaction::Read {
                addr: 0x4A,
                len: REPORT_LENGTH
            }
        );
    }

    #[test]
    fn test_read_sample_decodes() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&report_bytes());

        let mut reader = Bno08xReportReader::new(i2c, Bno08xReaderConfig::default());
        let sample = reader.read_sample().unwrap();

        assert_eq!(sample.gyro, [100, -50, 0]);
        assert_eq!(sample.temperature, 4);
        assert_eq!(sample.accel, [10, 20, 30]);
    }

    #[test]
    fn test_short_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&report_bytes()[..12]);

        let mut reader = Bno08xReportReader::new(i2c, Bno08xReaderConfig::default());
        assert_eq!(
            reader.read_sample(),
            Err(SampleError::Bus(BusError::ShortRead {
                expected: REPORT_LENGTH,
                received: 12
            }))
        );
    }

    #[test]
    fn test_zero_length_read() {
        let i2c = MockI2c::new(I2cConfig::default());
        let mut reader = Bno08xReportReader::new(i2c, Bno08xReaderConfig::default());

        let mut report = [0u8; REPORT_LENGTH];
        assert_eq!(
            reader.read_report(&mut report),
            Err(BusError::ShortRead {
                expected: REPORT_LENGTH,
                received: 0
            })
        );
    }

    #[test]
    fn test_write_failure_skips_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&report_bytes());
        i2c.set_failure(Some(I2cError::Nack));

        let mut reader = Bno08xReportReader::new(&mut i2c, Bno08xReaderConfig::default());
        let mut report = [0u8; REPORT_LENGTH];
        assert_eq!(
            reader.read_report(&mut report),
            Err(BusError::Transaction(I2cError::Nack))
        );

        // Only the address write was attempted
        assert_eq!(i2c.transactions().len(), 1);
    }

    #[test]
    fn test_alternate_address() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&report_bytes());

        let config = Bno08xReaderConfig {
            address: Bno08xReportReader::<()>::ALTERNATE_ADDRESS,
        };
        let mut reader = Bno08xReportReader::new(&mut i2c, config);
        assert_eq!(reader.address(), 0x4B);
        reader.read_sample().unwrap();

        assert_eq!(
            i2c.transactions()[1],
            I2cTransaction::Read {
                addr: 0x4B,
                len: REPORT_LENGTH
            }
        );
    }
}
