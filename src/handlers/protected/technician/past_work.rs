use axum::Extension;

use crate::database::models::TicketWithMaker;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::technician_service;

/// GET /api/technician/past-work - Tickets the caller has fixed or seen
/// through to closure, most recently touched first.
pub async fn past_work(Extension(user): Extension<AuthUser>) -> ApiResult<Vec<TicketWithMaker>> {
    user.require_technician()?;

    let history = technician_service::get_technician_history(user.user_id).await?;

    Ok(ApiResponse::success(history))
}
