use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::auth::{AdminLoginRequest, AdminLoginResponse},
    error::AppResult,
    middleware::auth::{AdminSession, check_password},
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct StorageStatus {
    pub error: Option<String>,
}

pub fn login(state: &AppState, payload: AdminLoginRequest) -> AppResult<ApiResponse<AdminLoginResponse>> {
    if let Err(err) = check_password(&state.admin_password, &payload.password) {
        tracing::warn!("admin login rejected");
        return Err(err);
    }
    Ok(ApiResponse::success(
        "Authenticated",
        AdminLoginResponse {
            authenticated: true,
        },
        Some(Meta::empty()),
    ))
}

pub fn storage_status(state: &AppState, _admin: AdminSession) -> AppResult<ApiResponse<StorageStatus>> {
    let catalog = state.catalog()?;
    Ok(ApiResponse::success(
        "Storage status",
        StorageStatus {
            error: catalog.storage_error().map(str::to_string),
        },
        None,
    ))
}

pub fn clear_storage_error(state: &AppState, _admin: AdminSession) -> AppResult<ApiResponse<StorageStatus>> {
    let mut catalog = state.catalog()?;
    catalog.clear_storage_error();
    Ok(ApiResponse::success(
        "Storage error cleared",
        StorageStatus { error: None },
        None,
    ))
}
