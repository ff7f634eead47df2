use yew::prelude::*;

use crate::components::app::Page;
use crate::hooks::{use_auth_context, use_theme};
use crate::stores::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let auth = use_auth_context();
    let theme = use_theme();
    let user = auth.state.user.clone();

    let nav_class = |target: Page| {
        if props.page == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Home))
    };
    let go_profile = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Profile))
    };

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="brand">
                    <span class="brand-badge">{"A"}</span>
                    <span class="brand-name">{"AuthApp"}</span>
                    <button class={nav_class(Page::Home)} onclick={go_home}>{"Home"}</button>
                    <button class={nav_class(Page::Profile)} onclick={go_profile}>{"Profile"}</button>
                </div>
                <div class="navbar-actions">
                    <button class="icon-btn" onclick={on_toggle_theme} aria-label="Toggle theme">
                        { if theme.theme == Theme::Dark { "☀️" } else { "🌙" } }
                    </button>
                    {
                        if let Some(user) = user {
                            html! {
                                <>
                                    <span class="greeting">{format!("Hello, {}", user.name)}</span>
                                    <button class="btn" onclick={on_logout}>{"Sign Out"}</button>
                                </>
                            }
                        } else {
                            html! { <span class="muted small">{"Sign In"}</span> }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}
