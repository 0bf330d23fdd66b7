use axum::{extract::Path, Extension};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::technician_service;

/// POST /api/technician/tickets/:ticket_id/fixed - Mark a claimed ticket
/// as fixed; it then waits for the maker's review.
pub async fn mark_fixed(
    Extension(user): Extension<AuthUser>,
    Path(ticket_id): Path<Uuid>,
) -> ApiResult<Value> {
    user.require_technician()?;

    let ticket = technician_service::mark_ticket_fixed(ticket_id, user.user_id).await?;

    tracing::info!(ticket_id = %ticket.id, technician_id = %user.user_id, "ticket marked fixed");

    Ok(ApiResponse::success(json!({
        "message": "Ticket marked as fixed. Waiting for user review.",
        "ticket": ticket,
    })))
}
