use axum::Json;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::user_service::{self, RegisterInput};

use super::utils::{session_response, SessionResponse};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub is_technician: bool,
}

/// POST /api/auth/register - Create an account and receive a JWT token
///
/// The role is derived from the email address: `@admin.com` becomes an
/// admin, a checked technician box requires a field domain
/// (`@hardware.com`, `@software.com`), everyone else is an employee.
pub async fn register(Json(payload): Json<RegisterRequest>) -> ApiResult<SessionResponse> {
    let mut field_errors = HashMap::new();
    if payload.name.trim().is_empty() {
        field_errors.insert("name".to_string(), "This field is required".to_string());
    }
    if payload.email.trim().is_empty() {
        field_errors.insert("email".to_string(), "This field is required".to_string());
    }
    if payload.password.trim().is_empty() {
        field_errors.insert("password".to_string(), "This field is required".to_string());
    }
    if !field_errors.is_empty() {
        return Err(ApiError::validation_error(
            "Missing required fields",
            Some(field_errors),
        ));
    }

    let user = user_service::register_user(RegisterInput {
        email: payload.email,
        password: payload.password,
        name: payload.name,
        is_technician: payload.is_technician,
    })
    .await?;

    tracing::info!(user_id = %user.id, role = ?user.role, "registered new user");

    Ok(ApiResponse::created(session_response(&user)?))
}
