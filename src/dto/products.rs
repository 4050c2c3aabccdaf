use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Category, Product},
};

/// Everything a caller may set on a product. The store fills in `id` and
/// `createdAt` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
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
}

impl ProductFormData {
    /// Checks the admin form rules. The catalog store accepts any shape, so
    /// this runs at the HTTP boundary before a mutation reaches it.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(AppError::BadRequest(
                "price must be a positive number".into(),
            ));
        }
        if self.has_discount == Some(true) {
            match self.discount_percentage {
                Some(pct) if (1.0..=100.0).contains(&pct) => {}
                _ => {
                    return Err(AppError::BadRequest(
                        "discountPercentage must be between 1 and 100".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl From<&Product> for ProductFormData {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            short_description: product.short_description.clone(),
            category: product.category,
            sizes: product.sizes.clone(),
            images: product.images.clone(),
            featured: product.featured,
            has_discount: product.has_discount,
            discount_percentage: product.discount_percentage,
        }
    }
}

/// A product together with the price a shopper actually pays.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub display_price: f64,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let display_price = product.display_price();
        Self {
            product,
            display_price,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<ProductView>)]
    pub items: Vec<ProductView>,
}

impl ProductList {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            items: products
                .into_iter()
                .cloned()
                .map(ProductView::from)
                .collect(),
        }
    }
}
