pub mod auth;
pub mod user;

pub use auth::{AuthLoginCsrf, SetupLoginCsrf};
pub use user::SessionUserId;
