//! Citizen registration, followed by an automatic login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::LoginForm;

use crate::net::api;
use crate::state::auth::{AUTO_LOGIN_DELAY, AuthState, RegisterFields, persist_session, register_error_message};
use crate::util::auth::install_signed_in_redirect;
use crate::util::timer;

/// Notice shown between a successful registration and the automatic login.
pub const REGISTERED_NOTICE: &str = "Registration successful! Signing you in...";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());

    let fields = RwSignal::new(RegisterFields::default());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.loading) {
            return;
        }
        let current = fields.get_untracked();
        let request = match current.validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        auth.update(|a| a.loading = true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::register(&request).await {
                leptos::logging::warn!("registration failed: {e}");
                auth.update(|a| a.loading = false);
                error.set(Some(register_error_message(&e).to_owned()));
                return;
            }
            notice.set(Some(REGISTERED_NOTICE));
            timer::sleep(AUTO_LOGIN_DELAY).await;
            match api::login(&LoginForm::new(&request.email, &request.password)).await {
                Ok(token) => {
                    let user = current.user();
                    persist_session(&token.access_token, &user);
                    auth.update(|a| a.sign_in(token.access_token, user));
                }
                Err(e) => {
                    leptos::logging::warn!("automatic login failed: {e}");
                    auth.update(|a| a.loading = false);
                    navigate("/login", NavigateOptions::default());
                }
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, slot: fn(&mut RegisterFields) -> &mut String| {
        view! {
            <label class="auth-label">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| *slot(f) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name", "text", |f| &mut f.full_name)}
                    {field("Email", "email", |f| &mut f.email)}
                    {field("Password", "password", |f| &mut f.password)}
                    {field("Confirm password", "password", |f| &mut f.confirm_password)}
                    {field("Phone (optional)", "tel", |f| &mut f.phone)}
                    {field("Address (optional)", "text", |f| &mut f.address)}
                    <button class="button button--primary" type="submit" disabled=move || auth.with(|a| a.loading)>
                        {move || if auth.with(|a| a.loading) { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.with(Option::is_some)>
                    <p class="form-notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
