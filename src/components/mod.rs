pub mod app;
pub mod login_screen;
pub mod navbar;
pub mod profile;
pub mod register_screen;

pub use app::{App, AppProps, Page};
pub use login_screen::LoginScreen;
pub use navbar::Navbar;
pub use profile::Profile;
pub use register_screen::RegisterScreen;
