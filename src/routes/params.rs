use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::Category;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Only products in this category.
    pub category: Option<Category>,
    /// Only featured (`true`) or non-featured (`false`) products.
    pub featured: Option<bool>,
    /// Page number, starting at 1. Without `page` and `per_page` the whole
    /// listing is returned.
    pub page: Option<i64>,
    /// Items per page, 1 to 100, default 20.
    pub per_page: Option<i64>,
}

impl ProductQuery {
    /// `(page, per_page, offset)` when the caller asked for a page.
    pub fn page_window(&self) -> Option<(i64, i64, i64)> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        Some((page, per_page, offset))
    }
}
