// ============================================================================
// LOCAL FORM VALIDATION - Checks performed before contacting the provider
// ============================================================================

use crate::models::AuthError;
use crate::utils::constants::MIN_PASSWORD_LEN;

pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

/// Accepts `local@domain` where both parts are non-empty and free of
/// whitespace, and the domain has a dot with at least one character on each
/// side.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(AuthError::InvalidEmailFormat),
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return Err(AuthError::InvalidEmailFormat);
    }
    if domain.is_empty() || domain.chars().any(char::is_whitespace) {
        return Err(AuthError::InvalidEmailFormat);
    }

    let has_dotted_suffix = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_dotted_suffix {
        return Err(AuthError::InvalidEmailFormat);
    }

    Ok(())
}
