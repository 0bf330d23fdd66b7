mod user;
mod verify;

pub use user::user_id;
pub use verify::verify;
