use thiserror::Error;

/// Errors surfaced by credential exchange. `WeakPassword` and
/// `InvalidEmailFormat` are raised locally before the identity service is
/// contacted; the rest are mapped from provider error codes.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum AuthError {
    #[error("Incorrect password. Please try again.")]
    InvalidCredentials,

    #[error("An account with this email already exists.")]
    AccountAlreadyExists,

    #[error("No account found with this email.")]
    AccountNotFound,

    #[error("Password must be at least 6 characters long.")]
    WeakPassword,

    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,

    #[error("Authentication failed: {0}")]
    Provider(String),
}

impl AuthError {
    /// Map a provider error code (e.g. `auth/wrong-password`) to the local
    /// taxonomy. Unrecognized codes keep the provider's message.
    pub fn from_provider(code: Option<&str>, message: &str) -> Self {
        match code {
            Some("auth/wrong-password") | Some("auth/invalid-credential") => {
                Self::InvalidCredentials
            }
            Some("auth/user-not-found") => Self::AccountNotFound,
            Some("auth/email-already-in-use") => Self::AccountAlreadyExists,
            Some("auth/weak-password") => Self::WeakPassword,
            Some("auth/invalid-email") => Self::InvalidEmailFormat,
            _ => Self::Provider(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_provider_codes_are_mapped() {
        assert_eq!(
            AuthError::from_provider(Some("auth/wrong-password"), "ignored"),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            AuthError::from_provider(Some("auth/user-not-found"), "ignored"),
            AuthError::AccountNotFound
        );
        assert_eq!(
            AuthError::from_provider(Some("auth/email-already-in-use"), "ignored"),
            AuthError::AccountAlreadyExists
        );
        assert_eq!(
            AuthError::from_provider(Some("auth/weak-password"), "ignored"),
            AuthError::WeakPassword
        );
    }

    #[test]
    fn unknown_codes_keep_the_provider_message() {
        let err = AuthError::from_provider(Some("auth/network-request-failed"), "network down");
        assert_eq!(err, AuthError::Provider("network down".to_string()));
        assert_eq!(err.to_string(), "Authentication failed: network down");
    }

    #[test]
    fn missing_code_keeps_the_provider_message() {
        assert_eq!(
            AuthError::from_provider(None, "something broke"),
            AuthError::Provider("something broke".to_string())
        );
    }
}
