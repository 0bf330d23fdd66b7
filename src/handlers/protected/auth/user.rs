use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::PublicUser;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::user_service;

#[derive(Debug, Deserialize)]
pub struct UserIdRequest {
    pub id: Uuid,
}

/// POST /api/auth/user-id - Look up a user by id
pub async fn user_id(Json(payload): Json<UserIdRequest>) -> ApiResult<PublicUser> {
    let user = user_service::get_user_by_id(payload.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(user.to_public()))
}
