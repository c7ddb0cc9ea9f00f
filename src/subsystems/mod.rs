//! Subsystems
//!
//! - [`correction`]: raw report to corrected body-frame sample
//! - [`ahrs`]: update cycle feeding the orientation fusion filter

pub mod ahrs;
pub mod correction;
