use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Field, MakerInfo, Ticket, TicketStatus, TicketWithMaker};

use super::TicketError;

/// All tickets filed by a user, newest first.
pub async fn get_user_tickets(user_id: Uuid) -> Result<Vec<Ticket>, TicketError> {
    let pool = DatabaseManager::pool().await?;

    let tickets = sqlx::query_as::<_, Ticket>(
        "SELECT * FROM tickets WHERE maker_id = $1 ORDER BY made_at DESC",
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    Ok(tickets)
}

/// File a new ticket. It starts OPEN and unassigned, waiting in the queue
/// of the requested field.
pub async fn make_ticket(
    user_id: Uuid,
    title: &str,
    description: &str,
    field: Field,
) -> Result<TicketWithMaker, TicketError> {
    let pool = DatabaseManager::pool().await?;

    let ticket = sqlx::query_as::<_, Ticket>(
        "INSERT INTO tickets (title, description, field, maker_id)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(title)
    .bind(description)
    .bind(field)
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    let (name, email) = sqlx::query_as::<_, (String, String)>(
        "SELECT name, email FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await?;

    Ok(TicketWithMaker {
        ticket,
        maker: MakerInfo { name, email },
    })
}

/// Record the maker's review of a fixed ticket and close it.
///
/// Runs as a conditional update inside a transaction: the row is only
/// touched when the caller is the maker and the ticket is FIXED. A miss is
/// classified afterwards so the client sees the right status code.
pub async fn submit_review(
    ticket_id: Uuid,
    user_id: Uuid,
    rating: i32,
    comment: &str,
) -> Result<Ticket, TicketError> {
    if !(1..=5).contains(&rating) {
        return Err(TicketError::InvalidRating);
    }

    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Ticket>(
        "UPDATE tickets
         SET review_rating = $3, review_comment = $4, status = 'CLOSED', updated_at = now()
         WHERE id = $1 AND maker_id = $2 AND status = 'FIXED'
         RETURNING *",
    )
    .bind(ticket_id)
    .bind(user_id)
    .bind(rating)
    .bind(comment)
    .fetch_optional(&mut *tx)
    .await?;

    let ticket = match updated {
        Some(ticket) => ticket,
        None => {
            let existing = sqlx::query_as::<_, (Uuid, TicketStatus)>(
                "SELECT maker_id, status FROM tickets WHERE id = $1",
            )
            .bind(ticket_id)
            .fetch_optional(&mut *tx)
            .await?;

            return Err(match existing {
                None => TicketError::NotFound,
                Some((maker_id, _)) if maker_id != user_id => TicketError::NotMaker,
                Some(_) => TicketError::NotAwaitingReview,
            });
        }
    };

    tx.commit().await?;
    Ok(ticket)
}
