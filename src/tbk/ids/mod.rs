mod symbol;
mod user_id;

pub use symbol::Symbol;
pub use user_id::UserId;
