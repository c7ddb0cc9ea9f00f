//! Platform abstraction layer
//!
//! This module provides the hardware abstraction the correction core is
//! written against. Board support crates implement [`traits::I2cInterface`]
//! for their bus peripheral; host tests use the mock implementation.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{I2cError, PlatformError, Result};
pub use traits::{I2cConfig, I2cInterface};
