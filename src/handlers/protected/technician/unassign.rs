use axum::{extract::Path, Extension};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::technician_service;

/// POST /api/technician/tickets/:ticket_id/unassignSelf - Hand a claimed
/// ticket back to the queue. Closed tickets cannot be unassigned.
pub async fn unassign_self(
    Extension(user): Extension<AuthUser>,
    Path(ticket_id): Path<Uuid>,
) -> ApiResult<Value> {
    user.require_technician()?;

    let ticket = technician_service::unassign_ticket(ticket_id, user.user_id).await?;

    tracing::info!(ticket_id = %ticket.id, technician_id = %user.user_id, "ticket unassigned");

    Ok(ApiResponse::success(json!({
        "message": "You have been unassigned. The ticket is now Open.",
        "ticket": ticket,
    })))
}
