//! IMU sensor drivers
//!
//! - `bno08x`: BNO080/BNO085/BNO086 raw report reader

pub mod bno08x;
