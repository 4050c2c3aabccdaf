//! Durable key-value slots the catalog is mirrored into.
//!
//! A slot behaves like browser local storage: string values under string
//! keys, a fixed byte budget, and a distinguishable error when a write
//! does not fit.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

/// Default byte budget, matching the usual browser local-storage quota.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("storage quota exceeded: {required} bytes required, quota is {quota} bytes")]
    QuotaExceeded { required: u64, quota: u64 },

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SlotError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, SlotError::QuotaExceeded { .. })
    }
}

pub trait KeyValueSlot: Send {
    /// Returns the stored value, or `None` when nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Replaces the value under `key`. Fails with
    /// [`SlotError::QuotaExceeded`] when the slot has no room for it, in
    /// which case the previous value is left untouched.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError>;
}

impl<T: KeyValueSlot + ?Sized> KeyValueSlot for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        (**self).set(key, value)
    }
}

/// Bytes charged against the quota for one entry.
pub(crate) fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}
