// ============================================================================
// IDENTITY SERVICE CONTRACT - Seam between the app and the external provider
// ============================================================================
// All credential verification, token issuance, and session persistence live
// behind this trait. Production uses the JS SDK bindings (identity_ffi);
// tests inject plain Rust mocks.
// ============================================================================

use async_trait::async_trait;

use crate::models::{AuthError, Principal};

/// Federated login providers offered on the sign-in screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FederatedProvider {
    Google,
    GitHub,
}

impl FederatedProvider {
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::GitHub => "github.com",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }

    /// Session name used when the provider reports neither a display name
    /// nor an email.
    pub fn fallback_name(&self) -> &'static str {
        match self {
            Self::Google => "Google User",
            Self::GitHub => "GitHub User",
        }
    }
}

pub type AuthChangeCallback = Box<dyn Fn(Option<Principal>)>;

/// Handle for the provider's auth-state channel. Cancels the underlying
/// subscription when dropped.
pub struct AuthSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl AuthSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Contract with the external identity service. Each credential-exchange
/// call is one-shot: no retry, no timeout, no cancellation.
#[async_trait(?Send)]
pub trait IdentityService {
    /// Push notifications of principal changes. `None` means no signed-in
    /// principal; the latest notification wins.
    fn on_auth_change(&self, callback: AuthChangeCallback) -> AuthSubscription;

    /// Provider-hosted interactive sign-in (Google, GitHub).
    async fn sign_in_with_popup(
        &self,
        provider: FederatedProvider,
    ) -> Result<Principal, AuthError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError>;

    async fn create_account_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
