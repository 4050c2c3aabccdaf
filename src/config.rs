use std::{env, path::PathBuf};

use anyhow::Context;

use crate::storage::{DEFAULT_QUOTA_BYTES, FileSlot, KeyValueSlot, MemorySlot};

const DEFAULT_ADMIN_PASSWORD: &str = "aura2024";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory for the file-backed catalog slot. Unset means the catalog
    /// lives in memory only.
    pub storage_dir: Option<PathBuf>,
    pub storage_quota_bytes: u64,
    pub admin_password: String,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let storage_dir = env::var("CATALOG_STORAGE_DIR")
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);
        let storage_quota_bytes = match env::var("CATALOG_STORAGE_QUOTA_BYTES") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid CATALOG_STORAGE_QUOTA_BYTES {raw:?}"))?,
            Err(_) => DEFAULT_QUOTA_BYTES,
        };
        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        let body_limit_bytes = env::var("REQUEST_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|b| b.parse::<usize>().ok())
            .unwrap_or(10 * 1024 * 1024);

        Ok(Self {
            host,
            port,
            storage_dir,
            storage_quota_bytes,
            admin_password,
            body_limit_bytes,
        })
    }

    /// Opens the slot the catalog store persists into.
    pub fn open_slot(&self) -> anyhow::Result<Box<dyn KeyValueSlot>> {
        match &self.storage_dir {
            Some(dir) => {
                let slot = FileSlot::open_with_quota(dir, self.storage_quota_bytes)
                    .with_context(|| format!("opening catalog storage at {}", dir.display()))?;
                tracing::info!(dir = %dir.display(), quota = self.storage_quota_bytes, "using file catalog storage");
                Ok(Box::new(slot))
            }
            None => {
                tracing::info!(quota = self.storage_quota_bytes, "using in-memory catalog storage");
                Ok(Box::new(MemorySlot::with_quota(self.storage_quota_bytes)))
            }
        }
    }
}
