pub mod groups;
pub mod lists;
pub mod types;
pub mod users;

pub use sqlx::postgres::PgPool;
pub use types::*;
