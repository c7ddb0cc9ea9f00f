//! Mock I2C implementation for testing

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{I2cConfig, I2cInterface},
    Result,
};
use heapless::Vec;

/// Maximum number of recorded transactions
const MAX_TRANSACTIONS: usize = 32;

/// Maximum bytes recorded per write / queued for reads
const MAX_DATA: usize = 64;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8, MAX_DATA> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8, MAX_DATA>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification and allows
/// pre-programming read data. Reads deliver at most the queued bytes, so an
/// under-filled queue behaves like a device that stops early (short read).
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: Vec<I2cTransaction, MAX_TRANSACTIONS>,
    read_data: Vec<u8, MAX_DATA>,
    fail_with: Option<I2cError>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            read_data: Vec::new(),
            fail_with: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Set data to return for read operations
    ///
    /// Data beyond the mock's capacity is dropped.
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data.clear();
        let len = data.len().min(MAX_DATA);
        let _ = self.read_data.extend_from_slice(&data[..len]);
    }

    /// Make every subsequent transaction fail with `error`
    ///
    /// Pass `None` to restore normal behavior.
    pub fn set_failure(&mut self, error: Option<I2cError>) {
        self.fail_with = error;
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn record(&mut self, transaction: I2cTransaction) {
        let _ = self.transactions.push(transaction);
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with {
            Some(err) => Err(PlatformError::I2c(err)),
            None => Ok(()),
        }
    }

    fn drain_into(&mut self, buffer: &mut [u8]) -> usize {
        let to_read = core::cmp::min(buffer.len(), self.read_data.len());
        buffer[..to_read].copy_from_slice(&self.read_data[..to_read]);

        let remaining: Vec<u8, MAX_DATA> = self.read_data.iter().skip(to_read).copied().collect();
        self.read_data = remaining;
        to_read
    }
}

fn truncated(data: &[u8]) -> Vec<u8, MAX_DATA> {
    data.iter().take(MAX_DATA).copied().collect()
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.record(I2cTransaction::Write {
            addr,
            data: truncated(data),
        });
        self.check_failure()
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<usize> {
        self.record(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });
        self.check_failure()?;
        Ok(self.drain_into(buffer))
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> Result<usize> {
        self.record(I2cTransaction::WriteRead {
            addr,
            write_data: truncated(write_data),
            read_len: read_buffer.len(),
        });
        self.check_failure()?;
        Ok(self.drain_into(read_buffer))
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.config.frequency = frequency;
        Ok(())
    }
}
