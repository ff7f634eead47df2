use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::services::identity::FederatedProvider;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let auth = use_auth_context();

    let email = use_state(String::default);
    let password = use_state(String::default);

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
        let sign_in = auth.sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            sign_in.emit(((*email).clone(), (*password).clone()));
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

    let on_show_register = {
        let on_show_register = props.on_show_register.clone();
        Callback::from(move |_| on_show_register.emit(()))
    };

    html! {
        <div class="center-wrap">
            <div class="card card-login">
                <div class="card-header">
                    <span class="icon">{"🔐"}</span>
                    <h2>{"Welcome!"}</h2>
                    <p class="muted">{"Sign in to your account"}</p>
                </div>

                <form onsubmit={on_submit}>
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

                    <button type="submit" class="btn primary">{"Login ➜"}</button>

                    <p class="muted small center">{"Or sign in with"}</p>
                    <div class="socials center">
                        <button
                            type="button"
                            class="icon-btn google"
                            onclick={on_google}
                            aria-label="Sign in with Google"
                        >{"G"}</button>
                        <button
                            type="button"
                            class="icon-btn github"
                            onclick={on_github}
                            aria-label="Sign in with GitHub"
                        >{"GH"}</button>
                    </div>

                    <p class="muted small center">
                        {"Don't have an account? "}
                        <button type="button" class="link" onclick={on_show_register}>
                            {"Create one"}
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
