use axum::Extension;

use crate::database::models::Ticket;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::employee_service;

/// POST /api/employee/get-tickets - All tickets filed by the caller,
/// newest first, across every status.
pub async fn get_tickets(Extension(user): Extension<AuthUser>) -> ApiResult<Vec<Ticket>> {
    let tickets = employee_service::get_user_tickets(user.user_id).await?;

    Ok(ApiResponse::success(tickets))
}
