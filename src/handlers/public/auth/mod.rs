mod login;
mod register;
mod utils;

pub use login::login;
pub use register::register;
pub use utils::SessionResponse;
