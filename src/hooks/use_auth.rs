use yew::prelude::*;

use crate::models::{Principal, Session};
use crate::services::auth_service;
use crate::services::identity::FederatedProvider;
use crate::stores::SessionStore;

/// Auth state mirrored from the SessionStore for rendering, plus the inline
/// form error from the last credential exchange.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub sign_in: Callback<(String, String)>,
    pub sign_up: Callback<(String, String)>,
    pub sign_in_federated: Callback<FederatedProvider>,
    pub logout: Callback<()>,
}

impl Clone for UseAuthHandle {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            sign_in: self.sign_in.clone(),
            sign_up: self.sign_up.clone(),
            sign_in_federated: self.sign_in_federated.clone(),
            logout: self.logout.clone(),
        }
    }
}

impl PartialEq for UseAuthHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

#[hook]
pub fn use_auth(store: SessionStore) -> UseAuthHandle {
    let state = use_state(|| AuthState {
        user: store.current(),
        loading: store.is_loading(),
        error: None,
    });

    // Mirror store notifications into Yew state for as long as the hook is
    // mounted.
    {
        let state = state.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe({
                let state = state.clone();
                let store = store.clone();
                move |session| {
                    // Any session transition supersedes a lingering form
                    // error.
                    state.set(AuthState {
                        user: session,
                        loading: store.is_loading(),
                        error: None,
                    });
                }
            });
            move || drop(subscription)
        });
    }

    let sign_in = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |(email, password): (String, String)| {
            if email.trim().is_empty() || password.trim().is_empty() {
                set_error(
                    &state,
                    Some("Please enter both email and password to sign in.".to_string()),
                );
                return;
            }
            let state = state.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let identity = store.identity();
                match auth_service::sign_in_with_email(identity.as_ref(), &email, &password).await
                {
                    Ok(principal) => {
                        store.login(
                            &session_name(&principal, "Email User"),
                            &principal.email,
                            principal.photo_url.clone(),
                        );
                    }
                    Err(err) => {
                        log::error!("Authentication error: {}", err);
                        set_error(&state, Some(err.to_string()));
                    }
                }
            });
        })
    };

    let sign_up = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |(email, password): (String, String)| {
            if email.trim().is_empty() || password.trim().is_empty() {
                set_error(
                    &state,
                    Some("Please fill email and password to create an account.".to_string()),
                );
                return;
            }
            let state = state.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let identity = store.identity();
                match auth_service::create_account_with_email(identity.as_ref(), &email, &password)
                    .await
                {
                    Ok(principal) => {
                        // New accounts have no display name yet.
                        store.login(&principal.email, &principal.email, None);
                    }
                    Err(err) => {
                        log::error!("Authentication error: {}", err);
                        set_error(&state, Some(err.to_string()));
                    }
                }
            });
        })
    };

    let sign_in_federated = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |provider: FederatedProvider| {
            let state = state.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let identity = store.identity();
                match auth_service::sign_in_federated(identity.as_ref(), provider).await {
                    Ok(principal) => {
                        store.login(
                            &session_name(&principal, provider.fallback_name()),
                            &principal.email,
                            principal.photo_url.clone(),
                        );
                    }
                    Err(err) => {
                        log::error!("{} sign-in error: {}", provider.label(), err);
                        set_error(&state, Some(format!("{} sign-in failed", provider.label())));
                    }
                }
            });
        })
    };

    let logout = {
        let store = store.clone();
        Callback::from(move |_| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Sign-out failures are logged only; the session stays as-is.
                if let Err(err) = store.logout().await {
                    log::error!("Error signing out: {}", err);
                }
            });
        })
    };

    UseAuthHandle {
        state,
        sign_in,
        sign_up,
        sign_in_federated,
        logout,
    }
}

fn set_error(state: &UseStateHandle<AuthState>, error: Option<String>) {
    let mut next = (**state).clone();
    next.error = error;
    state.set(next);
}

fn session_name(principal: &Principal, fallback: &str) -> String {
    principal
        .display_name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| Some(principal.email.clone()).filter(|email| !email.is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}
