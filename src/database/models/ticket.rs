use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::user::Field;

/// Ticket lifecycle: OPEN -> IN_PROGRESS (claim) -> FIXED (technician done)
/// -> CLOSED (maker review). Unassigning reverts to OPEN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    #[sqlx(rename = "IN_PROGRESS")]
    InProgress,
    Fixed,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub field: Field,
    pub maker_id: Uuid,
    pub assignee_id: Option<Uuid>,
    pub review_rating: Option<i32>,
    pub review_comment: Option<String>,
    pub made_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row shape for queries that pull the maker alongside the ticket.
#[derive(Debug, FromRow)]
pub struct TicketWithMakerRow {
    #[sqlx(flatten)]
    pub ticket: Ticket,
    pub maker_name: String,
    pub maker_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakerInfo {
    pub name: String,
    pub email: String,
}

/// Ticket plus maker contact info, as returned by the queue and
/// ticket-creation endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketWithMaker {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub maker: MakerInfo,
}

impl From<TicketWithMakerRow> for TicketWithMaker {
    fn from(row: TicketWithMakerRow) -> Self {
        Self {
            ticket: row.ticket,
            maker: MakerInfo {
                name: row.maker_name,
                email: row.maker_email,
            },
        }
    }
}
