//! Parameter Storage System
//!
//! In-memory, fixed-capacity parameter store plus the IMU parameter block.
//!
//! # Parameter Types
//!
//! - `Bool` - Boolean value
//! - `Int` - 32-bit signed integer
//! - `Float` - 32-bit floating point

pub mod imu;
pub mod storage;

pub use imu::ImuCorrectionParams;
pub use storage::{ParamFlags, ParamValue, ParameterStore};
