// ============================================================================
// AUTH CONTEXT - Share the auth handle across components
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};
use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    /// The one SessionStore constructed at process start.
    pub store: SessionStore,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let handle = use_auth(props.store.clone());

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("AuthContextProvider is missing from the tree")
}
