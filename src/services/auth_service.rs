use crate::models::{AuthError, Principal};
use crate::services::identity::{FederatedProvider, IdentityService};
use crate::utils::validation::{validate_email, validate_password};

/// Sign in with email and password. Credential verification happens entirely
/// on the provider side.
pub async fn sign_in_with_email(
    identity: &dyn IdentityService,
    email: &str,
    password: &str,
) -> Result<Principal, AuthError> {
    identity
        .sign_in_with_password(email.trim(), password.trim())
        .await
}

/// Create a new account with email and password. Email format and password
/// length are validated locally; the identity service is only contacted when
/// both checks pass.
pub async fn create_account_with_email(
    identity: &dyn IdentityService,
    email: &str,
    password: &str,
) -> Result<Principal, AuthError> {
    let email = email.trim();
    let password = password.trim();

    validate_email(email)?;
    validate_password(password)?;

    identity.create_account_with_password(email, password).await
}

/// Federated sign-in through a provider-hosted popup.
pub async fn sign_in_federated(
    identity: &dyn IdentityService,
    provider: FederatedProvider,
) -> Result<Principal, AuthError> {
    identity.sign_in_with_popup(provider).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::identity::{AuthChangeCallback, AuthSubscription};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Counts provider calls so tests can assert that local validation
    /// short-circuits the exchange.
    #[derive(Default)]
    struct CountingIdentity {
        calls: Cell<usize>,
    }

    impl CountingIdentity {
        fn principal(email: &str) -> Principal {
            Principal {
                display_name: None,
                email: email.to_string(),
                photo_url: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl IdentityService for CountingIdentity {
        fn on_auth_change(&self, _callback: AuthChangeCallback) -> AuthSubscription {
            AuthSubscription::new(|| {})
        }

        async fn sign_in_with_popup(
            &self,
            _provider: FederatedProvider,
        ) -> Result<Principal, AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Self::principal("popup@example.com"))
        }

        async fn sign_in_with_password(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<Principal, AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Self::principal(email))
        }

        async fn create_account_with_password(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<Principal, AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Self::principal(email))
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn weak_password_is_rejected_without_contacting_the_provider() {
        let identity = CountingIdentity::default();
        let result = block_on(create_account_with_email(&identity, "ann@x.com", "12345"));
        assert_eq!(result, Err(AuthError::WeakPassword));
        assert_eq!(identity.calls.get(), 0);
    }

    #[test]
    fn malformed_email_is_rejected_without_contacting_the_provider() {
        let identity = CountingIdentity::default();
        for email in ["ann", "ann@", "ann@x"] {
            let result = block_on(create_account_with_email(&identity, email, "123456"));
            assert_eq!(result, Err(AuthError::InvalidEmailFormat));
        }
        assert_eq!(identity.calls.get(), 0);
    }

    #[test]
    fn valid_sign_up_reaches_the_provider_with_trimmed_credentials() {
        let identity = CountingIdentity::default();
        let result = block_on(create_account_with_email(
            &identity,
            "  ann@x.com  ",
            " 123456 ",
        ));
        assert_eq!(result.unwrap().email, "ann@x.com");
        assert_eq!(identity.calls.get(), 1);
    }

    #[test]
    fn sign_in_passes_credentials_through() {
        let identity = CountingIdentity::default();
        let result = block_on(sign_in_with_email(&identity, "ann@x.com", "secret1"));
        assert_eq!(result.unwrap().email, "ann@x.com");
        assert_eq!(identity.calls.get(), 1);
    }
}
