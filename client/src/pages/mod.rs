//! Route-level page components.
//!
//! List pages share one loading flow: a state setter hands back a
//! [`Fetch`] when a load is due, [`spawn_list_load`] performs it, and the
//! page state's `resolve` applies the outcome under its ticket.

pub mod ai_chat;
pub mod ai_qa;
pub mod budget;
pub mod dashboard;
pub mod institutions;
pub mod legal;
pub mod legal_search;
pub mod login;
pub mod register;
pub mod reviews;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::loader::{Fetch, RequestTicket};
use crate::util::auth::drop_session_on_unauthorized;

/// Resolver applied to a page state once a list request finishes.
pub type ListResolver<S, T> = fn(&mut S, RequestTicket, Result<Vec<T>, ApiError>);

/// Fetch `fetch.path` in the background and resolve `state` with the outcome.
pub fn spawn_list_load<S, T>(auth: RwSignal<AuthState>, state: RwSignal<S>, fetch: Fetch, resolve: ListResolver<S, T>)
where
    S: Send + Sync + 'static,
    T: DeserializeOwned + 'static,
{
    let Fetch { ticket, path } = fetch;
    leptos::task::spawn_local(async move {
        let outcome = api::fetch_list::<T>(&path).await;
        if let Err(error) = &outcome {
            drop_session_on_unauthorized(auth, error);
        }
        state.update(|s| resolve(s, ticket, outcome));
    });
}

/// `<option>` elements for a filter select, led by an "all" choice.
pub fn filter_options(all_label: &'static str, options: Vec<String>) -> impl IntoView {
    let mut rows = vec![view! { <option value=records::ALL>{all_label}</option> }.into_any()];
    rows.extend(options.into_iter().map(|option| {
        let value = option.clone();
        view! { <option value=value>{option}</option> }.into_any()
    }));
    rows
}
