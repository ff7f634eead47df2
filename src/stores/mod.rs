pub mod session_store;
pub mod theme_store;

pub use session_store::{SessionStore, SessionSubscription};
pub use theme_store::Theme;
