use axum::Extension;

use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/auth/verify - Confirm that the presented token is valid.
/// The JWT middleware has already done the work by the time we get here.
pub async fn verify(Extension(_user): Extension<AuthUser>) -> ApiResult<bool> {
    Ok(ApiResponse::success(true))
}
