pub mod auth;
pub mod session;

pub use auth::AuthError;
pub use session::{Principal, Session};
