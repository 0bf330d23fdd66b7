use axum::{Extension, Json};
use serde::Deserialize;
use std::collections::HashMap;

use crate::database::models::{Field, TicketWithMaker};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::employee_service;

#[derive(Debug, Deserialize)]
pub struct MakeTicketRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub field: Field,
}

/// POST /api/employee/make-ticket - File a new ticket into the OPEN queue
/// of the given field.
pub async fn make_ticket(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<MakeTicketRequest>,
) -> ApiResult<TicketWithMaker> {
    let mut field_errors = HashMap::new();
    if payload.title.trim().is_empty() {
        field_errors.insert("title".to_string(), "This field is required".to_string());
    }
    if payload.description.trim().is_empty() {
        field_errors.insert("description".to_string(), "This field is required".to_string());
    }
    if !field_errors.is_empty() {
        return Err(ApiError::validation_error(
            "Missing required fields",
            Some(field_errors),
        ));
    }

    let ticket = employee_service::make_ticket(
        user.user_id,
        payload.title.trim(),
        payload.description.trim(),
        payload.field,
    )
    .await?;

    tracing::info!(ticket_id = %ticket.ticket.id, field = ?payload.field, "ticket created");

    Ok(ApiResponse::created(ticket))
}
