pub mod auth_context;
pub mod theme_context;
pub mod use_auth;

pub use auth_context::{use_auth_context, AuthContextProvider};
pub use theme_context::{use_theme, ThemeContextProvider, UseThemeHandle};
pub use use_auth::{use_auth, AuthState, UseAuthHandle};
