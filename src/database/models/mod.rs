pub mod ticket;
pub mod user;

pub use ticket::{MakerInfo, Ticket, TicketStatus, TicketWithMaker, TicketWithMakerRow};
pub use user::{Field, PublicUser, Role, User};
