mod claim;
mod fixed;
mod past_work;
mod queue;
mod unassign;

pub use claim::claim_ticket;
pub use fixed::mark_fixed;
pub use past_work::past_work;
pub use queue::get_queue;
pub use unassign::unassign_self;
