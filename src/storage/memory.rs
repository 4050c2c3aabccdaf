use std::collections::HashMap;

use super::{DEFAULT_QUOTA_BYTES, KeyValueSlot, SlotError, entry_size};

/// Process-local slot. Contents are lost on restart, so this is what the
/// server runs with when no storage directory is configured, and what the
/// tests use to provoke quota failures.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
    quota: u64,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::with_quota(DEFAULT_QUOTA_BYTES)
    }

    pub fn with_quota(quota: u64) -> Self {
        Self {
            entries: HashMap::new(),
            quota,
        }
    }

    /// Pre-populates `key` without checking the quota.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn used_bytes(&self) -> u64 {
        self.entries.iter().map(|(k, v)| entry_size(k, v)).sum()
    }

    pub fn quota(&self) -> u64 {
        self.quota
    }

    /// Changes the budget for later writes. Existing entries are kept even
    /// if they no longer fit.
    pub fn set_quota(&mut self, quota: u64) {
        self.quota = quota;
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        let others: u64 = self
            .entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| entry_size(k, v))
            .sum();
        let required = others + entry_size(key, value);
        if required > self.quota {
            return Err(SlotError::QuotaExceeded {
                required,
                quota: self.quota,
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
