/// Identity provider configuration, fixed at compile time.
/// Values come from `.env` via build.rs (copy `.env.example` to `.env`).
pub const IDENTITY_API_KEY: &str = match option_env!("IDENTITY_API_KEY") {
    Some(key) => key,
    None => "",
};

pub const IDENTITY_AUTH_DOMAIN: &str = match option_env!("IDENTITY_AUTH_DOMAIN") {
    Some(domain) => domain,
    None => "localhost",
};

pub const IDENTITY_PROJECT_ID: &str = match option_env!("IDENTITY_PROJECT_ID") {
    Some(id) => id,
    None => "auth-portal-dev",
};

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Minimum password length accepted at sign-up, checked locally before the
/// identity service is contacted.
pub const MIN_PASSWORD_LEN: usize = 6;
