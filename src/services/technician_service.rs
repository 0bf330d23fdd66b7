use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Field, Ticket, TicketStatus, TicketWithMaker, TicketWithMakerRow};

use super::TicketError;

/// Open, unassigned tickets in one technical field, oldest first, with the
/// maker's contact info for the queue view.
pub async fn get_queue(field: Field) -> Result<Vec<TicketWithMaker>, TicketError> {
    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query_as::<_, TicketWithMakerRow>(
        "SELECT t.*, u.name AS maker_name, u.email AS maker_email
         FROM tickets t
         JOIN users u ON u.id = t.maker_id
         WHERE t.field = $1 AND t.status = 'OPEN' AND t.assignee_id IS NULL
         ORDER BY t.made_at ASC",
    )
    .bind(field)
    .fetch_all(&pool)
    .await?;

    Ok(rows.into_iter().map(TicketWithMaker::from).collect())
}

/// Claim an open ticket for a technician.
///
/// The update is guarded on `assignee_id IS NULL`, so when two technicians
/// race for the same ticket exactly one statement matches the row. The
/// loser's miss is classified inside the same transaction.
pub async fn claim_ticket(ticket_id: Uuid, technician_id: Uuid) -> Result<Ticket, TicketError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Ticket>(
        "UPDATE tickets
         SET assignee_id = $2, status = 'IN_PROGRESS', updated_at = now()
         WHERE id = $1 AND assignee_id IS NULL AND status = 'OPEN'
         RETURNING *",
    )
    .bind(ticket_id)
    .bind(technician_id)
    .fetch_optional(&mut *tx)
    .await?;

    let ticket = match updated {
        Some(ticket) => ticket,
        None => {
            let exists = sqlx::query_as::<_, (Uuid,)>("SELECT id FROM tickets WHERE id = $1")
                .bind(ticket_id)
                .fetch_optional(&mut *tx)
                .await?;

            return Err(match exists {
                None => TicketError::NotFound,
                Some(_) => TicketError::AlreadyAssigned,
            });
        }
    };

    tx.commit().await?;
    Ok(ticket)
}

/// Mark a claimed ticket as fixed; only the current assignee may do so.
pub async fn mark_ticket_fixed(ticket_id: Uuid, technician_id: Uuid) -> Result<Ticket, TicketError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Ticket>(
        "UPDATE tickets
         SET status = 'FIXED', updated_at = now()
         WHERE id = $1 AND assignee_id = $2 AND status = 'IN_PROGRESS'
         RETURNING *",
    )
    .bind(ticket_id)
    .bind(technician_id)
    .fetch_optional(&mut *tx)
    .await?;

    let ticket = match updated {
        Some(ticket) => ticket,
        None => return Err(classify_miss(&mut tx, ticket_id, technician_id).await?),
    };

    tx.commit().await?;
    Ok(ticket)
}

/// Tickets this technician has fixed or seen through to closure, most
/// recently touched first.
pub async fn get_technician_history(
    technician_id: Uuid,
) -> Result<Vec<TicketWithMaker>, TicketError> {
    let pool = DatabaseManager::pool().await?;

    let rows = sqlx::query_as::<_, TicketWithMakerRow>(
        "SELECT t.*, u.name AS maker_name, u.email AS maker_email
         FROM tickets t
         JOIN users u ON u.id = t.maker_id
         WHERE t.assignee_id = $1 AND t.status IN ('FIXED', 'CLOSED')
         ORDER BY t.updated_at DESC",
    )
    .bind(technician_id)
    .fetch_all(&pool)
    .await?;

    Ok(rows.into_iter().map(TicketWithMaker::from).collect())
}

/// Give a claimed ticket back to the queue. Closed tickets stay closed.
pub async fn unassign_ticket(ticket_id: Uuid, technician_id: Uuid) -> Result<Ticket, TicketError> {
    let pool = DatabaseManager::pool().await?;
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Ticket>(
        "UPDATE tickets
         SET assignee_id = NULL, status = 'OPEN', updated_at = now()
         WHERE id = $1 AND assignee_id = $2 AND status <> 'CLOSED'
         RETURNING *",
    )
    .bind(ticket_id)
    .bind(technician_id)
    .fetch_optional(&mut *tx)
    .await?;

    let ticket = match updated {
        Some(ticket) => ticket,
        None => {
            let existing = sqlx::query_as::<_, (Option<Uuid>, TicketStatus)>(
                "SELECT assignee_id, status FROM tickets WHERE id = $1",
            )
            .bind(ticket_id)
            .fetch_optional(&mut *tx)
            .await?;

            return Err(match existing {
                None => TicketError::NotFound,
                Some((assignee_id, _)) if assignee_id != Some(technician_id) => {
                    TicketError::NotAssignee
                }
                Some(_) => TicketError::TicketClosed,
            });
        }
    };

    tx.commit().await?;
    Ok(ticket)
}

/// Work out why a guarded assignee update matched nothing.
async fn classify_miss(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ticket_id: Uuid,
    technician_id: Uuid,
) -> Result<TicketError, TicketError> {
    let existing = sqlx::query_as::<_, (Option<Uuid>, TicketStatus)>(
        "SELECT assignee_id, status FROM tickets WHERE id = $1",
    )
    .bind(ticket_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(match existing {
        None => TicketError::NotFound,
        Some((assignee_id, _)) if assignee_id != Some(technician_id) => TicketError::NotAssignee,
        Some(_) => TicketError::NotInProgress,
    })
}
