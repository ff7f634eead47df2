use yew::prelude::*;

use crate::components::app::Page;
use crate::hooks::use_auth_context;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let auth = use_auth_context();

    let Some(user) = auth.state.user.clone() else {
        return html! {};
    };

    let avatar_url = user.photo_url.clone().unwrap_or_else(|| {
        let encoded = js_sys::encode_uri_component(&user.name);
        format!(
            "https://ui-avatars.com/api/?name={}&background=ddd&color=555&size=128",
            String::from(encoded)
        )
    });

    let on_back_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Home))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <div class="center-wrap">
            <div class="card card-profile">
                <div class="center">
                    <img class="avatar" src={avatar_url} alt="Profile" />
                </div>
                <h2 class="profile-name">{user.name.clone()}</h2>
                <div class="field profile-email">
                    <p>
                        <span class="muted small">{"Email"}</span>
                        <br />
                        {user.email.clone()}
                    </p>
                </div>
                <div class="profile-actions">
                    <button class="btn primary" onclick={on_back_home}>{"Back to Home"}</button>
                    <button class="btn danger" onclick={on_logout}>{"Logout"}</button>
                </div>
            </div>
        </div>
    }
}
