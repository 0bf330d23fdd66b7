use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Ticket;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::employee_service;

#[derive(Debug, Deserialize)]
pub struct ReviewData {
    #[serde(rename = "reviewRating")]
    pub review_rating: i32,
    #[serde(rename = "reviewComment", default)]
    pub review_comment: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    #[serde(rename = "ticketId")]
    pub ticket_id: Uuid,
    // The original web client sends this key capitalized
    #[serde(rename = "ReviewData", alias = "reviewData")]
    pub review_data: ReviewData,
}

/// POST /api/employee/submit-review - Rate a fixed ticket and close it.
/// Only the maker may review, and only while the ticket is FIXED.
pub async fn submit_review(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<SubmitReviewRequest>,
) -> ApiResult<Ticket> {
    let ticket = employee_service::submit_review(
        payload.ticket_id,
        user.user_id,
        payload.review_data.review_rating,
        &payload.review_data.review_comment,
    )
    .await?;

    tracing::info!(ticket_id = %ticket.id, rating = payload.review_data.review_rating, "ticket reviewed and closed");

    Ok(ApiResponse::success(ticket))
}
