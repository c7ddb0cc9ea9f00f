//! AHRS (Attitude and Heading Reference System) front end
//!
//! The fusion algorithm itself is external. This module wires a raw report
//! source through the correction pipeline into a [`FusionFilter`]:
//!
//! ```text
//! ┌──────────────┐   ┌────────────────────┐   ┌──────────────┐
//! │ ReportSource │──►│ CorrectionPipeline │──►│ FusionFilter │──► Quaternion
//! └──────────────┘   └────────────────────┘   └──────────────┘
//!                              │                      │
//!                              └──────► DebugSink ◄───┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tracker_imu::subsystems::ahrs::{TempCompensatedAhrs, TempCompensatedAhrsConfig};
//!
//! let mut ahrs = TempCompensatedAhrs::new(reader, vqf, TempCompensatedAhrsConfig::default());
//! loop {
//!     if let Ok(q) = ahrs.update() {
//!         // q is (w, x, y, z)
//!     }
//! }
//! ```

pub mod task;
pub mod traits;

pub use task::{TempCompensatedAhrs, TempCompensatedAhrsConfig};
pub use traits::{DebugSink, FilterInput, FusionFilter, NoSink};
