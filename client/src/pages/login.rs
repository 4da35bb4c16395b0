//! Login form supporting sign-in and sign-up against the identity provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::identity::IdentityHandle;
use crate::state::form::{AuthMode, FormState, SubmitStart};

/// Mode-dependent text on the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginCopy {
    pub title: &'static str,
    pub identifier_label: &'static str,
    pub identifier_placeholder: &'static str,
    pub submit_label: &'static str,
    pub toggle_prompt: &'static str,
    pub toggle_action: &'static str,
}

pub fn login_copy(mode: AuthMode) -> LoginCopy {
    match mode {
        AuthMode::SignIn => LoginCopy {
            title: "Sign in",
            identifier_label: "Username",
            identifier_placeholder: "Username",
            submit_label: "Sign in",
            toggle_prompt: "Don't have an account?",
            toggle_action: "Sign up",
        },
        AuthMode::SignUp => LoginCopy {
            title: "Sign up",
            identifier_label: "Choose a username",
            identifier_placeholder: "Username to use",
            submit_label: "Sign up",
            toggle_prompt: "Already have an account?",
            toggle_action: "Sign in",
        },
    }
}

/// Submit button label, replaced while a request is in flight.
pub fn submit_label(mode: AuthMode, submitting: bool) -> &'static str {
    if submitting { "Working..." } else { login_copy(mode).submit_label }
}

/// Sign-in / sign-up form. `form` is owned by the panel so the mode survives
/// re-renders; `loading` disables input until the initial session refresh
/// settles.
#[component]
pub fn LoginPage(form: RwSignal<FormState>, loading: Signal<bool>) -> impl IntoView {
    let identity = expect_context::<IdentityHandle>();
    let min_secret_len = expect_context::<ClientConfig>().min_secret_len;

    let mode = move || form.with(|f| f.mode);
    let busy = move || loading.get() || form.with(|f| f.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let start = form.try_update(|f| f.begin_submit(min_secret_len)).unwrap_or(SubmitStart::Busy);
        let SubmitStart::Ready(request) = start else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let service = identity.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::util::auth::submit_credentials(service.as_ref(), &request).await;
                // The panel may have been torn down mid-request.
                form.try_update(|f| f.finish(&outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (identity, request);
    };

    view! {
        <div class="login-container">
            <h1 class="login-title">{move || login_copy(mode()).title}</h1>

            <Show when=move || form.with(|f| f.error.is_some())>
                <div class="error-message">{move || form.with(|f| f.error.clone().unwrap_or_default())}</div>
            </Show>

            <form class="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="identifier">{move || login_copy(mode()).identifier_label}</label>
                    <input
                        id="identifier"
                        type="text"
                        autocomplete="username"
                        required=true
                        placeholder=move || login_copy(mode()).identifier_placeholder
                        disabled=busy
                        prop:value=move || form.with(|f| f.identifier.clone())
                        on:input=move |ev| form.update(|f| f.set_identifier(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="secret">"Password"</label>
                    <input
                        id="secret"
                        type="password"
                        autocomplete=move || match mode() {
                            AuthMode::SignIn => "current-password",
                            AuthMode::SignUp => "new-password",
                        }
                        required=true
                        minlength=min_secret_len.to_string()
                        placeholder="Password"
                        disabled=busy
                        prop:value=move || form.with(|f| f.secret.clone())
                        on:input=move |ev| form.update(|f| f.set_secret(event_target_value(&ev)))
                    />
                </div>

                <button type="submit" class="login-btn" disabled=busy>
                    {move || submit_label(mode(), form.with(|f| f.submitting))}
                </button>
            </form>

            <div class="signup-link">
                {move || login_copy(mode()).toggle_prompt}
                " "
                <button type="button" class="link-btn" on:click=move |_| form.update(FormState::toggle_mode)>
                    {move || login_copy(mode()).toggle_action}
                </button>
            </div>
        </div>
    }
}
