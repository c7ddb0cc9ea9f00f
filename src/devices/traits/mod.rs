//! Device traits
//!
//! This module contains hardware-independent trait definitions for device drivers.
//! These traits enable:
//! - Unit testing with mock implementations
//! - Sensor independence for higher-level subsystems

pub mod report;

pub use report::{BusError, ReportSource, SampleError};
