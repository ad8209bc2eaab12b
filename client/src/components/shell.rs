//! Page chrome: brand, section navigation and the session control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders inside [`Shell`]. It is the only component that reads
//! the auth store for display and the only place logout happens.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use records::UserRole;

use crate::state::auth::{AuthState, forget_session};

/// Section links in display order.
pub const NAV_LINKS: [(&str, &str); 8] = [
    ("/", "Dashboard"),
    ("/institutions", "Institutions"),
    ("/legal", "Legal Repository"),
    ("/legal/search", "Legal Search"),
    ("/ai", "AI Q&A"),
    ("/ai/chat", "AI Chat"),
    ("/reviews", "Reviews"),
    ("/budget", "Budget"),
];

/// Links a signed-in user with no account role (`Anonymous`) does not see.
const CITIZEN_LINKS: [&str; 1] = ["/reviews"];

/// Navigation for the current viewer. With nobody signed in every link is
/// shown; a signed-in `Anonymous` profile loses the citizen-only links.
pub fn visible_links(role: Option<UserRole>) -> Vec<(&'static str, &'static str)> {
    NAV_LINKS
        .into_iter()
        .filter(|(href, _)| role != Some(UserRole::Anonymous) || !CITIZEN_LINKS.contains(href))
        .collect()
}

/// Exact-path match, ignoring a trailing slash.
pub fn is_active(href: &str, pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == href
}

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let session = move || {
        if auth.with(AuthState::is_authenticated) {
            let name = auth.with(|a| a.display_name().unwrap_or("Citizen").to_owned());
            view! {
                <div class="shell__session">
                    <span class="shell__user">{name}</span>
                    <button
                        class="shell__logout"
                        on:click=move |_| {
                            forget_session();
                            auth.update(AuthState::sign_out);
                        }
                    >
                        "Logout"
                    </button>
                </div>
            }
                .into_any()
        } else {
            view! {
                <div class="shell__session">
                    <A href="/login">"Login"</A>
                    <A href="/register">"Register"</A>
                </div>
            }
                .into_any()
        }
    };

    view! {
        <div class="shell">
            <header class="shell__header">
                <A href="/">
                    <span class="shell__brand">"Civic Transparency Portal"</span>
                </A>
                <nav class="shell__nav">
                    {move || {
                        visible_links(auth.with(|a| a.user.as_ref().map(|u| u.role)))
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="shell__link"
                                        class:shell__link--active=move || pathname.with(|p| is_active(href, p))
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                {session}
            </header>
            <main class="shell__main">{children()}</main>
        </div>
    }
}
