//! BNO08x Raw IMU Report Support
//!
//! I2C polling and decoding of the raw gyro/accel/temperature report used by
//! the tracker's temperature-compensated correction path. The sensor hub's own
//! fusion output is not used here; corrected samples are handed to an external
//! fusion filter instead.
//!
//! ## Modules
//!
//! - `reports`: Report layout and all-or-nothing decoding into [`RawSample`]
//! - `reader`: Blocking I2C report reader implementing
//!   [`ReportSource`](crate::devices::traits::ReportSource)
//!
//! ## Usage
//!
//! ```ignore
//! use tracker_imu::devices::imu::bno08x::{Bno08xReportReader, Bno08xReaderConfig};
//!
//! let mut reader = Bno08xReportReader::new(i2c, Bno08xReaderConfig::default());
//! match reader.read_sample() {
//!     Ok(sample) => { /* hand to the correction pipeline */ }
//!     Err(_) => { /* no sample this cycle */ }
//! }
//! ```

pub mod reader;
pub mod reports;

pub use reader::{Bno08xReaderConfig, Bno08xReportReader};
pub use reports::{DecodeError, RawSample, REPORT_ID_RAW_IMU, REPORT_LENGTH};
