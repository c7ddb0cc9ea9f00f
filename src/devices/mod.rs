//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits.
//!
//! ## Modules
//!
//! - `imu`: IMU sensor drivers (BNO08x)
//! - `traits`: Device trait definitions (ReportSource, error types)

pub mod imu;
pub mod traits;
