use yew::prelude::*;

use crate::hooks::{use_auth_context, AuthContextProvider, ThemeContextProvider};
use crate::stores::SessionStore;

use super::{LoginScreen, Navbar, Profile, RegisterScreen};

/// The two pages of the app. Navigation requests are reconciled with the
/// auth state: Home redirects to Profile while signed in, Profile falls
/// back to Home once signed out.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Page {
    Home,
    Profile,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub store: SessionStore,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ThemeContextProvider>
            <AuthContextProvider store={props.store.clone()}>
                <Shell />
            </AuthContextProvider>
        </ThemeContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth_context();
    let page = use_state(|| Page::Home);
    let show_register = use_state(|| false);

    let signed_in = auth.state.user.is_some();

    // Follow sign-in/sign-out transitions.
    {
        let page = page.clone();
        use_effect_with(signed_in, move |signed_in| {
            page.set(if *signed_in { Page::Profile } else { Page::Home });
            || ()
        });
    }

    if auth.state.loading {
        // No auth-dependent UI until the identity service has reported.
        return html! {};
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| {
            let target = match target {
                Page::Home if signed_in => Page::Profile,
                Page::Profile if !signed_in => Page::Home,
                other => other,
            };
            page.set(target);
        })
    };

    let on_show_register = {
        let show_register = show_register.clone();
        Callback::from(move |_| show_register.set(true))
    };
    let on_show_login = {
        let show_register = show_register.clone();
        Callback::from(move |_| show_register.set(false))
    };

    let content = match (*page, signed_in) {
        (Page::Profile, true) => html! { <Profile on_navigate={on_navigate.clone()} /> },
        _ if *show_register => html! { <RegisterScreen {on_show_login} /> },
        _ => html! { <LoginScreen {on_show_register} /> },
    };

    html! {
        <>
            <Navbar page={*page} on_navigate={on_navigate} />
            {content}
        </>
    }
}
