//! The catalog store: the canonical, ordered product collection and its
//! mirror in a key-value slot.
//!
//! Every mutation rewrites the whole collection into the slot before it
//! returns. When that write fails the in-memory collection is rolled back
//! to whatever the slot still holds and an advisory message is raised, so
//! memory never drifts from what a restart would load.

use chrono::Utc;

use crate::{
    dto::products::ProductFormData,
    models::{Category, Product},
    storage::{KeyValueSlot, SlotError},
};

pub mod seed;

pub use seed::seed_catalog;

/// Slot key the catalog is persisted under.
pub const CATALOG_KEY: &str = "aura_products";

pub const STORAGE_FULL_MESSAGE: &str =
    "Storage full. Use image URLs instead of uploading, or remove some products.";
pub const STORAGE_WRITE_FAILED_MESSAGE: &str =
    "Changes could not be saved. The catalog was restored to its last saved state.";

pub struct CatalogStore {
    slot: Box<dyn KeyValueSlot>,
    products: Vec<Product>,
    storage_error: Option<String>,
    last_id: i64,
    id_suffix: u64,
}

impl CatalogStore {
    /// Loads the persisted catalog from `slot`, falling back to the seed
    /// catalog when nothing usable is stored. Never fails.
    pub fn open(slot: impl KeyValueSlot + 'static) -> Self {
        let slot: Box<dyn KeyValueSlot> = Box::new(slot);
        let products = match read_persisted(slot.as_ref()) {
            Ok(Some(products)) => {
                tracing::info!(count = products.len(), "loaded persisted catalog");
                products
            }
            Ok(None) => {
                tracing::info!("no persisted catalog, using seed catalog");
                seed_catalog()
            }
            Err(err) => {
                tracing::warn!(error = %err, "persisted catalog unreadable, using seed catalog");
                seed_catalog()
            }
        };
        let last_id = max_numeric_id(&products);

        Self {
            slot,
            products,
            storage_error: None,
            last_id,
            id_suffix: 0,
        }
    }

    pub fn create(&mut self, data: ProductFormData) -> Product {
        let product = Product {
            id: self.next_id(),
            name: data.name,
            price: data.price,
            description: data.description,
            short_description: data.short_description,
            category: data.category,
            sizes: data.sizes,
            images: data.images,
            featured: data.featured,
            has_discount: data.has_discount,
            discount_percentage: data.discount_percentage,
            created_at: Utc::now(),
        };
        tracing::debug!(id = %product.id, "creating product");
        self.products.push(product.clone());
        self.persist();
        product
    }

    /// Replaces every field except `id` and `created_at`. Unknown ids are
    /// ignored.
    pub fn update(&mut self, id: &str, data: ProductFormData) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.name = data.name;
            product.price = data.price;
            product.description = data.description;
            product.short_description = data.short_description;
            product.category = data.category;
            product.sizes = data.sizes;
            product.images = data.images;
            product.featured = data.featured;
            product.has_discount = data.has_discount;
            product.discount_percentage = data.discount_percentage;
            tracing::debug!(%id, "updated product");
        } else {
            tracing::debug!(%id, "update of unknown product ignored");
        }
        self.persist();
    }

    pub fn delete(&mut self, id: &str) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            tracing::debug!(%id, "delete of unknown product ignored");
        }
        self.persist();
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn list_featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Replaces the whole collection with the seed catalog and persists it.
    pub fn restore_seed(&mut self) {
        self.products = seed_catalog();
        self.last_id = self.last_id.max(max_numeric_id(&self.products));
        self.persist();
    }

    pub fn storage_error(&self) -> Option<&str> {
        self.storage_error.as_deref()
    }

    pub fn clear_storage_error(&mut self) {
        self.storage_error = None;
    }

    /// Returns the pending storage message, if any, and clears it.
    pub fn take_storage_error(&mut self) -> Option<String> {
        self.storage_error.take()
    }

    /// Millisecond timestamp, bumped past the last issued id so that ids
    /// stay unique and increasing even within the same millisecond.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut candidate = now.max(self.last_id.saturating_add(1));
        loop {
            let id = candidate.to_string();
            if !self.contains_id(&id) {
                self.last_id = candidate;
                return id;
            }
            match candidate.checked_add(1) {
                Some(next) => candidate = next,
                None => break,
            }
        }

        // Loaded ids already sit at the top of the numeric range.
        loop {
            self.id_suffix += 1;
            let id = format!("{candidate}-{}", self.id_suffix);
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    fn persist(&mut self) {
        let result = encode_catalog(&self.products)
            .and_then(|blob| self.slot.set(CATALOG_KEY, &blob).map_err(PersistError::from));

        match result {
            Ok(()) => {
                tracing::debug!(count = self.products.len(), "catalog persisted");
                self.storage_error = None;
            }
            Err(err) => {
                let message = if err.is_quota_exceeded() {
                    STORAGE_FULL_MESSAGE
                } else {
                    STORAGE_WRITE_FAILED_MESSAGE
                };
                tracing::warn!(error = %err, "catalog write failed, reverting to last saved state");
                self.storage_error = Some(message.to_string());
                self.products = match read_persisted(self.slot.as_ref()) {
                    Ok(Some(products)) => products,
                    Ok(None) => Vec::new(),
                    Err(err) => {
                        tracing::warn!(error = %err, "saved catalog unreadable, reverting to empty");
                        Vec::new()
                    }
                };
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum PersistError {
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error("product {0} has a price or discount that is not a finite number")]
    NonFinite(String),
    #[error("catalog serialization failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistError {
    fn is_quota_exceeded(&self) -> bool {
        matches!(self, PersistError::Slot(err) if err.is_quota_exceeded())
    }
}

/// JSON has no encoding for infinities or NaN; serde_json writes them as
/// `null`, which would make the blob unreadable on the next load.
fn encode_catalog(products: &[Product]) -> Result<String, PersistError> {
    let bad = products.iter().find(|p| {
        !p.price.is_finite() || p.discount_percentage.is_some_and(|pct| !pct.is_finite())
    });
    if let Some(product) = bad {
        return Err(PersistError::NonFinite(product.id.clone()));
    }
    Ok(serde_json::to_string(products)?)
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error("malformed catalog blob: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn read_persisted(slot: &dyn KeyValueSlot) -> Result<Option<Vec<Product>>, LoadError> {
    match slot.get(CATALOG_KEY)? {
        Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
        None => Ok(None),
    }
}

fn max_numeric_id(products: &[Product]) -> i64 {
    products
        .iter()
        .filter_map(|p| p.id.parse::<i64>().ok())
        .max()
        .unwrap_or(0)
}
