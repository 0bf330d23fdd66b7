pub mod employee_service;
pub mod technician_service;
pub mod user_service;

use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Domain outcomes for ticket mutations. Mapped to HTTP statuses in
/// `crate::error`.
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Ticket not found")]
    NotFound,

    #[error("Ticket is already assigned")]
    AlreadyAssigned,

    #[error("Ticket is assigned to another technician")]
    NotAssignee,

    #[error("Only the ticket maker can review it")]
    NotMaker,

    #[error("Ticket is closed")]
    TicketClosed,

    #[error("Ticket is not in progress")]
    NotInProgress,

    #[error("Ticket is not awaiting review")]
    NotAwaitingReview,

    #[error("Review rating out of range")]
    InvalidRating,

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
