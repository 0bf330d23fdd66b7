use axum::Extension;

use crate::database::models::TicketWithMaker;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::technician_service;

/// GET /api/technician/queue - Open, unassigned tickets in the caller's
/// field, oldest first.
pub async fn get_queue(Extension(user): Extension<AuthUser>) -> ApiResult<Vec<TicketWithMaker>> {
    let field = user.technician_field()?;

    let tickets = technician_service::get_queue(field).await?;

    Ok(ApiResponse::success(tickets))
}
