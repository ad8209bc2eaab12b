//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::shell::Shell;
use crate::pages::{
    ai_chat::AiChatPage, ai_qa::AiQaPage, budget::BudgetPage, dashboard::DashboardPage,
    institutions::InstitutionsPage, legal::LegalPage, legal_search::LegalSearchPage, login::LoginPage,
    register::RegisterPage, reviews::ReviewsPage,
};
use crate::state::auth::AuthState;

/// HTML document rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store; every other piece of state is local to its page.
/// The persisted session is restored after hydration so the server-rendered
/// markup always matches the first client render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    Effect::new(move || auth.set(AuthState::restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/civic-portal.css"/>
        <Title text="Civic Transparency Portal"/>

        <Router>
            <Shell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("institutions") view=InstitutionsPage/>
                    <Route path=StaticSegment("legal") view=LegalPage/>
                    <Route path=(StaticSegment("legal"), StaticSegment("search")) view=LegalSearchPage/>
                    <Route path=StaticSegment("ai") view=AiQaPage/>
                    <Route path=(StaticSegment("ai"), StaticSegment("chat")) view=AiChatPage/>
                    <Route path=StaticSegment("reviews") view=ReviewsPage/>
                    <Route path=StaticSegment("budget") view=BudgetPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </Shell>
        </Router>
    }
}
