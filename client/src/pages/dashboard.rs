//! Landing page with a card per portal section.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Dashboard cards: route, title and blurb.
pub const SECTIONS: [(&str, &str, &str); 7] = [
    ("/institutions", "Institutions", "Browse ministries, agencies and offices."),
    ("/legal", "Legal Repository", "Read published laws article by article."),
    ("/legal/search", "Legal Search", "Search laws by text, date, category or ministry."),
    ("/ai", "AI Legal Q&A", "Ask a question about the law and see the cited sources."),
    ("/ai/chat", "AI Chat", "Talk the law through with the assistant."),
    ("/reviews", "Citizen Reviews", "Read and write reviews of public services."),
    ("/budget", "Budget", "Follow how each ministry's budget is spent."),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| match a.display_name() {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome to the Civic Transparency Portal".to_owned(),
        })
    };

    view! {
        <section class="dashboard">
            <h1 class="page-title">{greeting}</h1>
            <p class="page-subtitle">
                "Public institutions, laws, reviews and budgets in one place."
            </p>
            <div class="dashboard__grid">
                {SECTIONS
                    .into_iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <a href=href class="dashboard__card">
                                <h2>{title}</h2>
                                <p>{blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
