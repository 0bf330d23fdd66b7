use axum::Json;
use serde::Deserialize;

use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::user_service;

use super::utils::{session_response, SessionResponse};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - Authenticate and receive a JWT token
///
/// Unknown emails and wrong passwords both answer 401 without saying which
/// one it was.
pub async fn login(Json(payload): Json<LoginRequest>) -> ApiResult<SessionResponse> {
    let user = user_service::authenticate(&payload.email, &payload.password).await?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(ApiResponse::success(session_response(&user)?))
}
