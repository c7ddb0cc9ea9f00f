//! In-memory Parameter Storage
//!
//! Fixed-capacity name → value map with per-parameter flags. Parameter
//! blocks (see [`super::imu`]) register their defaults here at boot and read
//! their effective values back.
//!
//! # Example
//!
//! ```
//! use tracker_imu::parameters::{ParamFlags, ParamValue, ParameterStore};
//!
//! let mut store = ParameterStore::new();
//! store.register("IMU_I2C_ADDR", ParamValue::Int(0x4A), ParamFlags::empty()).unwrap();
//!
//! store.set("IMU_I2C_ADDR", ParamValue::Int(0x4B)).unwrap();
//! assert_eq!(store.get("IMU_I2C_ADDR"), Some(&ParamValue::Int(0x4B)));
//! ```

use crate::platform::error::PlatformError;
use crate::platform::Result;
use bitflags::bitflags;
use heapless::{FnvIndexMap, String};

/// Maximum parameter name length
const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is not listed by `iter_names`
        const HIDDEN = 0b00000001;
        /// Parameter cannot be changed with `set`
        const READ_ONLY = 0b00000010;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

/// Parameter store
pub struct ParameterStore {
    /// Parameter values
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    /// Parameter flags
    flags: FnvIndexMap<String<PARAM_NAME_LEN>, ParamFlags, MAX_PARAMS>,
    /// Set when any value changed since creation or the last `mark_clean`
    dirty: bool,
}

fn key(name: &str) -> Result<String<PARAM_NAME_LEN>> {
    let mut key = String::new();
    key.push_str(name)
        .map_err(|_| PlatformError::InvalidConfig)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            flags: FnvIndexMap::new(),
            dirty: false,
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = key(name).ok()?;
        self.parameters.get(&key)
    }

    /// Set parameter value
    ///
    /// # Errors
    ///
    /// [`PlatformError::InvalidConfig`] if the parameter is not registered or
    /// is read-only.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let key = key(name)?;

        if !self.parameters.contains_key(&key) {
            return Err(PlatformError::InvalidConfig);
        }

        if let Some(flags) = self.flags.get(&key) {
            if flags.contains(ParamFlags::READ_ONLY) {
                return Err(PlatformError::InvalidConfig);
            }
        }

        self.parameters
            .insert(key, value)
            .map_err(|_| PlatformError::InvalidConfig)?;
        self.dirty = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// An already registered parameter keeps its current value.
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<()> {
        let key = key(name)?;

        if self.parameters.contains_key(&key) {
            return Ok(());
        }

        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| PlatformError::InvalidConfig)?;
        self.flags
            .insert(key, flags)
            .map_err(|_| PlatformError::InvalidConfig)?;
        self.dirty = true;
        Ok(())
    }

    /// Check if parameter is hidden
    pub fn is_hidden(&self, name: &str) -> bool {
        self.flags_of(name).contains(ParamFlags::HIDDEN)
    }

    /// Check if parameter is read-only
    pub fn is_read_only(&self, name: &str) -> bool {
        self.flags_of(name).contains(ParamFlags::READ_ONLY)
    }

    fn flags_of(&self, name: &str) -> ParamFlags {
        key(name)
            .ok()
            .and_then(|key| self.flags.get(&key).copied())
            .unwrap_or(ParamFlags::empty())
    }

    /// Get all parameter names (excluding hidden parameters)
    pub fn iter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .keys()
            .map(|name| name.as_str())
            .filter(|name| !self.is_hidden(name))
    }

    /// Get parameter count (excluding hidden parameters)
    pub fn count(&self) -> usize {
        self.iter_names().count()
    }

    /// Check if store has changes not yet acknowledged
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge all changes
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
