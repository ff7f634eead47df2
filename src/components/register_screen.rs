use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::services::identity::FederatedProvider;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub on_show_login: Callback<()>,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let auth = use_auth_context();

    let name = use_state(String::default);
    let email = use_state(String::default);
    let password = use_state(String::default);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let sign_up = auth.sign_up.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            sign_up.emit(((*email).clone(), (*password).clone()));
        })
    };

    let on_google = {
        let sign_in_federated = auth.sign_in_federated.clone();
        Callback::from(move |_| sign_in_federated.emit(FederatedProvider::Google))
    };

    let on_github = {
        let sign_in_federated = auth.sign_in_federated.clone();
        Callback::from(move |_| sign_in_federated.emit(FederatedProvider::GitHub))
    };

    let on_show_login = {
        let on_show_login = props.on_show_login.clone();
        Callback::from(move |_| on_show_login.emit(()))
    };

    html! {
        <div class="center-wrap">
            <div class="card card-signup">
                <div class="card-header">
                    <span class="icon">{"👤"}</span>
                    <h2>{"Create account!"}</h2>
                </div>

                <form onsubmit={on_submit}>
                    <label class="field">
                        <input
                            name="name"
                            value={(*name).clone()}
                            oninput={on_name_change}
                            placeholder="Name"
                        />
                    </label>
                    <label class="field">
                        <input
                            name="email"
                            value={(*email).clone()}
                            oninput={on_email_change}
                            placeholder="E-mail"
                        />
                    </label>
                    <label class="field">
                        <input
                            name="password"
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            placeholder="Password"
                        />
                    </label>

                    {
                        if let Some(error) = &auth.state.error {
                            html! { <p class="error small center">{error.clone()}</p> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="btn primary">{"Create ➜"}</button>

                    <p class="muted small center">{"Or create account using social media"}</p>
                    <div class="socials center">
                        <button type="button" class="icon-btn google" onclick={on_google}>{"G"}</button>
                        <button type="button" class="icon-btn github" onclick={on_github}>{"GH"}</button>
                    </div>

                    <p class="muted small center">
                        {"Already have an account? "}
                        <button type="button" class="link" onclick={on_show_login}>
                            {"Sign in"}
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
