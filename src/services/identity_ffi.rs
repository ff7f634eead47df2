// ============================================================================
// IDENTITY FFI - Foreign Function Interface for the provider's JS SDK
// ============================================================================
// Thin wrappers over the functions exposed by js/identity.js - no state, no
// logic beyond JsValue translation.
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::models::{AuthError, Principal};
use crate::services::identity::{
    AuthChangeCallback, AuthSubscription, FederatedProvider, IdentityService,
};
use crate::utils::constants::{IDENTITY_API_KEY, IDENTITY_AUTH_DOMAIN, IDENTITY_PROJECT_ID};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = identityInit)]
    fn identity_init(config_json: &str);

    #[wasm_bindgen(js_name = identityOnAuthChange)]
    fn identity_on_auth_change(callback: &JsValue) -> js_sys::Function;

    #[wasm_bindgen(js_name = identitySignInWithPopup)]
    fn identity_sign_in_with_popup(provider_id: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = identitySignInWithPassword)]
    fn identity_sign_in_with_password(email: &str, password: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = identityCreateAccount)]
    fn identity_create_account(email: &str, password: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = identitySignOut)]
    fn identity_sign_out() -> js_sys::Promise;
}

#[derive(Clone, Debug, Serialize)]
pub struct IdentityConfig {
    pub api_key: &'static str,
    pub auth_domain: &'static str,
    pub project_id: &'static str,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: IDENTITY_API_KEY,
            auth_domain: IDENTITY_AUTH_DOMAIN,
            project_id: IDENTITY_PROJECT_ID,
        }
    }
}

/// Initialise the provider SDK. Must run once before any other identity
/// call; the JS side also switches the SDK to session-scoped persistence.
pub fn init_identity(config: &IdentityConfig) {
    match serde_json::to_string(config) {
        Ok(json) => identity_init(&json),
        Err(err) => log::error!("invalid identity config: {}", err),
    }
}

/// `IdentityService` backed by the provider's JS SDK.
pub struct JsIdentityService;

#[async_trait(?Send)]
impl IdentityService for JsIdentityService {
    fn on_auth_change(&self, callback: AuthChangeCallback) -> AuthSubscription {
        let closure = Closure::wrap(Box::new(move |value: JsValue| {
            callback(principal_from_js(&value));
        }) as Box<dyn Fn(JsValue)>);

        let unsubscribe = identity_on_auth_change(closure.as_ref());

        // The closure must outlive the subscription; it travels inside the
        // cancel handler.
        AuthSubscription::new(move || {
            if let Err(err) = unsubscribe.call0(&JsValue::NULL) {
                log::warn!("failed to close auth-state subscription: {:?}", err);
            }
            drop(closure);
        })
    }

    async fn sign_in_with_popup(
        &self,
        provider: FederatedProvider,
    ) -> Result<Principal, AuthError> {
        let value = JsFuture::from(identity_sign_in_with_popup(provider.provider_id()))
            .await
            .map_err(error_from_js)?;
        expect_principal(&value)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let value = JsFuture::from(identity_sign_in_with_password(email, password))
            .await
            .map_err(error_from_js)?;
        expect_principal(&value)
    }

    async fn create_account_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let value = JsFuture::from(identity_create_account(email, password))
            .await
            .map_err(error_from_js)?;
        expect_principal(&value)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        JsFuture::from(identity_sign_out())
            .await
            .map_err(error_from_js)?;
        Ok(())
    }
}

fn principal_from_js(value: &JsValue) -> Option<Principal> {
    if value.is_null() || value.is_undefined() {
        return None;
    }

    let field = |key: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .filter(|s| !s.is_empty())
    };

    Some(Principal {
        display_name: field("displayName"),
        email: field("email").unwrap_or_default(),
        photo_url: field("photoURL"),
    })
}

fn expect_principal(value: &JsValue) -> Result<Principal, AuthError> {
    principal_from_js(value)
        .ok_or_else(|| AuthError::Provider("identity service returned no principal".to_string()))
}

fn error_from_js(err: JsValue) -> AuthError {
    let field = |key: &str| {
        js_sys::Reflect::get(&err, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    };

    let code = field("code");
    let message = field("message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown identity service error".to_string());

    AuthError::from_provider(code.as_deref(), &message)
}
