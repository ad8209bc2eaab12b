//! Citizen login with email and password.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::User;

use crate::net::api;
use crate::state::auth::{AuthState, login_error_message, persist_session, validate_login};
use crate::util::auth::install_signed_in_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let form = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(form) => form,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            match api::login(&form).await {
                Ok(token) => {
                    let user = User::citizen(&form.username);
                    persist_session(&token.access_token, &user);
                    auth.update(|a| a.sign_in(token.access_token, user));
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    auth.update(|a| a.loading = false);
                    error.set(Some(login_error_message(&e).to_owned()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Connexion"</h1>
                <p class="auth-card__subtitle">"Sign in to your citizen account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.ma"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || auth.with(|a| a.loading)>
                        {move || if auth.with(|a| a.loading) { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
