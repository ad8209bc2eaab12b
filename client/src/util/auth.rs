//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and register screens share the "already signed in" redirect, and
//! every page drops the session the same way when the backend rejects the
//! token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;

/// True once a session exists and the auth pages should step aside.
pub fn should_leave_auth_page(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Redirect to `/` whenever a session appears.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_auth_page(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Sign out locally when `error` is a rejected token.
///
/// The API layer has already removed the stored token; this keeps the
/// in-memory store in step with it.
pub fn drop_session_on_unauthorized(auth: RwSignal<AuthState>, error: &ApiError) {
    if error.is_unauthorized() && auth.with_untracked(AuthState::is_authenticated) {
        auth.update(AuthState::sign_out);
    }
}
