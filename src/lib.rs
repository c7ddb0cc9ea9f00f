#![cfg_attr(not(test), no_std)]

//! tracker_imu - IMU correction core for body-worn motion trackers
//!
//! Turns raw BNO08x inertial reports into temperature-compensated,
//! body-frame samples and feeds them to an orientation fusion filter.

// Platform abstraction layer (I2C bus, errors, mocks)
pub mod platform;

// Logging macros
pub mod core;

// Sensor report reader and decoder
pub mod devices;

// Correction pipeline and update cycle
pub mod subsystems;

// Runtime configuration
pub mod parameters;
