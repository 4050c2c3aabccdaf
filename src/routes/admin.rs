use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};

use crate::{
    dto::{
        auth::{AdminLoginRequest, AdminLoginResponse},
        products::{ProductFormData, ProductView},
    },
    error::AppResult,
    middleware::auth::AdminSession,
    response::ApiResponse,
    services::{
        admin_service::{self, StorageStatus},
        product_service,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route(
            "/storage-error",
            get(storage_status).delete(clear_storage_error),
        )
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Password accepted", body = ApiResponse<AdminLoginResponse>),
        (status = 401, description = "Incorrect password"),
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> AppResult<Json<ApiResponse<AdminLoginResponse>>> {
    let resp = admin_service::login(&state, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = ProductFormData,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<ProductView>),
        (status = 400, description = "Invalid product data"),
        (status = 401, description = "Unauthorized"),
        (status = 507, description = "Catalog storage full, change reverted"),
    ),
    security(("admin_password" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AdminSession,
    Json(payload): Json<ProductFormData>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductView>>)> {
    let resp = product_service::create_product(&state, admin, payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductFormData,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductView>),
        (status = 400, description = "Invalid product data"),
        (status = 404, description = "Product not found"),
        (status = 507, description = "Catalog storage full, change reverted"),
    ),
    security(("admin_password" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<ProductFormData>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let resp = product_service::update_product(&state, admin, &id, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product"),
        (status = 404, description = "Product not found"),
        (status = 507, description = "Catalog storage full, change reverted"),
    ),
    security(("admin_password" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = product_service::delete_product(&state, admin, &id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/storage-error",
    responses(
        (status = 200, description = "Pending storage warning, if any", body = ApiResponse<StorageStatus>),
    ),
    security(("admin_password" = [])),
    tag = "Admin"
)]
pub async fn storage_status(
    State(state): State<AppState>,
    admin: AdminSession,
) -> AppResult<Json<ApiResponse<StorageStatus>>> {
    let resp = admin_service::storage_status(&state, admin)?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/storage-error",
    responses(
        (status = 200, description = "Storage warning dismissed", body = ApiResponse<StorageStatus>),
    ),
    security(("admin_password" = [])),
    tag = "Admin"
)]
pub async fn clear_storage_error(
    State(state): State<AppState>,
    admin: AdminSession,
) -> AppResult<Json<ApiResponse<StorageStatus>>> {
    let resp = admin_service::clear_storage_error(&state, admin)?;
    Ok(Json(resp))
}
