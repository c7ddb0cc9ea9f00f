//! Core infrastructure
//!
//! Cross-cutting support shared by the device and subsystem layers.

pub mod logging;
