mod make_ticket;
mod review;
mod tickets;

pub use make_ticket::make_ticket;
pub use review::submit_review;
pub use tickets::get_tickets;
