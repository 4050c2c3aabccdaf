use crate::{
    catalog::CatalogStore,
    dto::products::{ProductFormData, ProductList, ProductView},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    state::AppState,
};

pub fn list_products(state: &AppState, query: ProductQuery) -> AppResult<ApiResponse<ProductList>> {
    let catalog = state.catalog()?;
    let filtered: Vec<&Product> = match query.category {
        Some(category) => catalog.list_by_category(category),
        None => catalog.list_all().iter().collect(),
    }
    .into_iter()
    .filter(|p| query.featured.is_none_or(|featured| p.featured == featured))
    .collect();

    let total = filtered.len();
    let (items, meta) = match query.page_window() {
        Some((page, per_page, offset)) => {
            let page_items = filtered
                .into_iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(per_page as usize);
            (
                ProductList::from_products(page_items),
                Meta::paged(page, per_page, total),
            )
        }
        None => (ProductList::from_products(filtered), Meta::total(total)),
    };

    Ok(ApiResponse::success("Products", items, Some(meta)))
}

pub fn featured_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let catalog = state.catalog()?;
    let featured = catalog.list_featured();
    let total = featured.len();
    Ok(ApiResponse::success(
        "Featured products",
        ProductList::from_products(featured),
        Some(Meta::total(total)),
    ))
}

pub fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<ProductView>> {
    let catalog = state.catalog()?;
    let product = match catalog.get(id) {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product.into(), None))
}

pub fn create_product(
    state: &AppState,
    _admin: AdminSession,
    payload: ProductFormData,
) -> AppResult<ApiResponse<ProductView>> {
    payload.validate()?;
    let mut catalog = state.catalog()?;
    let product = catalog.create(payload);
    ensure_saved(&catalog)?;

    tracing::info!(product_id = %product.id, name = %product.name, "product created");
    Ok(ApiResponse::success(
        "Product created",
        product.into(),
        Some(Meta::empty()),
    ))
}

pub fn update_product(
    state: &AppState,
    _admin: AdminSession,
    id: &str,
    payload: ProductFormData,
) -> AppResult<ApiResponse<ProductView>> {
    payload.validate()?;
    let mut catalog = state.catalog()?;
    if catalog.get(id).is_none() {
        return Err(AppError::NotFound);
    }
    catalog.update(id, payload);
    ensure_saved(&catalog)?;

    let product = catalog.get(id).cloned().ok_or(AppError::NotFound)?;
    tracing::info!(product_id = %id, "product updated");
    Ok(ApiResponse::success(
        "Updated",
        product.into(),
        Some(Meta::empty()),
    ))
}

pub fn delete_product(
    state: &AppState,
    _admin: AdminSession,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut catalog = state.catalog()?;
    if catalog.get(id).is_none() {
        return Err(AppError::NotFound);
    }
    catalog.delete(id);
    ensure_saved(&catalog)?;

    tracing::info!(product_id = %id, "product deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Turns a rolled-back mutation into an error response. The message stays
/// pending on the store until the admin dismisses it through
/// `DELETE /api/admin/storage-error` or a later write succeeds.
fn ensure_saved(catalog: &CatalogStore) -> AppResult<()> {
    match catalog.storage_error() {
        Some(message) => Err(AppError::StorageFull(message.to_string())),
        None => Ok(()),
    }
}
