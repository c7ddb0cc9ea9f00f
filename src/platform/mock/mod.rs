//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "mock")] {
//! use tracker_imu::platform::mock::MockI2c;
//! use tracker_imu::platform::traits::{I2cConfig, I2cInterface};
//!
//! let mut i2c = MockI2c::new(I2cConfig::default());
//! i2c.set_read_data(&[0x01, 0x02]);
//! let mut buf = [0u8; 2];
//! assert_eq!(i2c.read(0x4A, &mut buf), Ok(2));
//! # }
//! ```

mod i2c;

pub use i2c::{I2cTransaction, MockI2c};
