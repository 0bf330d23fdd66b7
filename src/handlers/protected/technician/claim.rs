use axum::{extract::Path, Extension};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::technician_service;

/// POST /api/technician/tickets/:ticket_id/claim - Take an open ticket.
///
/// Two technicians can race for the same queue entry; the guarded update
/// lets exactly one win and the other receives a 409.
pub async fn claim_ticket(
    Extension(user): Extension<AuthUser>,
    Path(ticket_id): Path<Uuid>,
) -> ApiResult<Value> {
    user.require_technician()?;

    let ticket = technician_service::claim_ticket(ticket_id, user.user_id).await?;

    tracing::info!(ticket_id = %ticket.id, technician_id = %user.user_id, "ticket claimed");

    Ok(ApiResponse::success(json!({
        "message": "Ticket claimed successfully",
        "ticket": ticket,
    })))
}
