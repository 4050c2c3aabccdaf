use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hoodie,
    Pants,
}

/// A catalog entry as it is held in memory and persisted.
///
/// `id` and `created_at` are stamped by the catalog store and never change
/// afterwards; everything else is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub category: Category,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_discount: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Price after discount, rounded to the nearest whole unit.
    ///
    /// The discount only applies when `has_discount` is set and the
    /// percentage is non-zero; otherwise the list price is returned as is.
    pub fn display_price(&self) -> f64 {
        match (self.has_discount, self.discount_percentage) {
            (Some(true), Some(pct)) if pct != 0.0 && !pct.is_nan() => {
                (self.price * (1.0 - pct / 100.0)).round()
            }
            _ => self.price,
        }
    }

    /// First image, used as the card/thumbnail image.
    pub fn display_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
