use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    catalog::CatalogStore,
    error::{AppError, AppResult},
};

/// Shared handles passed to every handler. The catalog store is created
/// once at startup; the mutex serializes access to it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<CatalogStore>>,
    pub admin_password: Arc<str>,
}

impl AppState {
    pub fn new(catalog: CatalogStore, admin_password: impl Into<Arc<str>>) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            admin_password: admin_password.into(),
        }
    }

    pub fn catalog(&self) -> AppResult<MutexGuard<'_, CatalogStore>> {
        self.catalog
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("catalog lock poisoned")))
    }
}
