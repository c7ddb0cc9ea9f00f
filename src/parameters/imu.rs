//! IMU Parameter Definitions
//!
//! # Parameters
//!
//! - `IMU_I2C_ADDR` - Sensor I2C address (default 0x4A, alternate 0x4B)
//! - `IMU_I2C_FREQ` - I2C bus frequency in Hz (default 400000)
//! - `IMU_DBG_TEMP` - Forward sample temperature to the debug sink (default off)
//! - `IMU_TCO_GYR` - Gyro bias drift per °C (°/s/°C, **read-only**)

use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::devices::imu::bno08x::Bno08xReaderConfig;
use crate::platform::traits::I2cConfig;
use crate::platform::Result;
use crate::subsystems::ahrs::TempCompensatedAhrsConfig;
use crate::subsystems::correction::GYRO_TEMP_COEFF_DPS_PER_C;

const DEFAULT_I2C_FREQUENCY: u32 = 400_000;

/// IMU parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuCorrectionParams {
    /// Sensor I2C address (7-bit)
    pub address: u8,
    /// I2C bus frequency (Hz)
    pub frequency: u32,
    /// Forward sample temperature to the debug sink
    pub debug_temperature: bool,
    /// Gyro bias drift per °C (°/s per °C)
    pub gyro_temp_coeff: f32,
}

impl Default for ImuCorrectionParams {
    fn default() -> Self {
        Self {
            address: Bno08xReaderConfig::default().address,
            frequency: DEFAULT_I2C_FREQUENCY,
            debug_temperature: false,
            gyro_temp_coeff: GYRO_TEMP_COEFF_DPS_PER_C,
        }
    }
}

impl ImuCorrectionParams {
    /// Register IMU parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<()> {
        let defaults = Self::default();

        store.register(
            "IMU_I2C_ADDR",
            ParamValue::Int(defaults.address as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "IMU_I2C_FREQ",
            ParamValue::Int(defaults.frequency as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "IMU_DBG_TEMP",
            ParamValue::Bool(defaults.debug_temperature),
            ParamFlags::empty(),
        )?;

        // Compiled into the calibrator; published for inspection only
        store.register(
            "IMU_TCO_GYR",
            ParamValue::Float(defaults.gyro_temp_coeff),
            ParamFlags::READ_ONLY,
        )?;

        Ok(())
    }

    /// Load IMU parameters from parameter store
    ///
    /// Missing, mistyped or out-of-range entries fall back to defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let defaults = Self::default();

        let address = match store.get("IMU_I2C_ADDR") {
            Some(ParamValue::Int(v)) => u8::try_from(*v)
                .ok()
                .filter(|addr| *addr <= 0x7F)
                .unwrap_or(defaults.address),
            _ => defaults.address,
        };

        let frequency = match store.get("IMU_I2C_FREQ") {
            Some(ParamValue::Int(v)) if *v > 0 => *v as u32,
            _ => defaults.frequency,
        };

        let debug_temperature = match store.get("IMU_DBG_TEMP") {
            Some(ParamValue::Bool(v)) => *v,
            Some(ParamValue::Int(v)) => *v != 0,
            _ => defaults.debug_temperature,
        };

        let gyro_temp_coeff = match store.get("IMU_TCO_GYR") {
            Some(ParamValue::Float(v)) => *v,
            _ => defaults.gyro_temp_coeff,
        };

        Self {
            address,
            frequency,
            debug_temperature,
            gyro_temp_coeff,
        }
    }

    /// Report reader configuration
    pub fn reader_config(&self) -> Bno08xReaderConfig {
        Bno08xReaderConfig {
            address: self.address,
        }
    }

    /// I2C bus configuration
    pub fn i2c_config(&self) -> I2cConfig {
        I2cConfig {
            frequency: self.frequency,
            ..I2cConfig::default()
        }
    }

    /// Update cycle configuration
    pub fn ahrs_config(&self) -> TempCompensatedAhrsConfig {
        TempCompensatedAhrsConfig {
            report_temperature: self.debug_temperature,
        }
    }
}
