//! Admin gate. This is a plain shared-password check that hides the admin
//! surface from casual visitors; it is not an authentication system.

use axum::{extract::FromRequestParts, http::HeaderMap};

use crate::{error::AppError, state::AppState};

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Marker extracted by admin handlers once the password header matched.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

pub fn check_password(expected: &str, given: &str) -> Result<(), AppError> {
    if given != expected {
        return Err(AppError::Unauthorized("Incorrect password".into()));
    }
    Ok(())
}

pub fn ensure_admin(headers: &HeaderMap, expected: &str) -> Result<AdminSession, AppError> {
    let given = headers
        .get(ADMIN_PASSWORD_HEADER)
        .ok_or_else(|| AppError::Unauthorized("Missing admin password".into()))?
        .to_str()
        .map_err(|_| AppError::BadRequest("Invalid admin password header".into()))?;
    check_password(expected, given)?;
    Ok(AdminSession)
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        ensure_admin(&parts.headers, &state.admin_password)
    }
}
