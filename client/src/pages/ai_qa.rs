//! AI legal Q&A: ask one question at a time, answers listed newest first.

use leptos::prelude::*;

use crate::components::answer::{ConfidenceBadge, LegalDisclaimer, SourceList};
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::qa::QaState;
use crate::util::auth::drop_session_on_unauthorized;
use crate::util::clock::{format_time, now_ms};

/// Starter questions offered under the input.
pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "What are the requirements for digital government services?",
    "How is personal data protected by law?",
    "What rights do citizens have to access public information?",
    "Which ministry oversees public procurement?",
];

#[component]
pub fn AiQaPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(QaState::default());
    let input = RwSignal::new(String::new());

    let ask = move |question: String| {
        let Some(request) = state.try_update(|s| s.submit(&question)).flatten() else {
            return;
        };
        input.set(String::new());
        leptos::task::spawn_local(async move {
            let outcome = api::ask(&request).await;
            if let Err(error) = &outcome {
                drop_session_on_unauthorized(auth, error);
            }
            state.update(|s| s.resolve(outcome, now_ms()));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ask(input.get_untracked());
    };

    view! {
        <section class="ai-qa">
            <h1 class="page-title">"AI Legal Q&A"</h1>
            <p class="page-subtitle">"Answers cite the laws and articles they rely on."</p>
            <form class="ask-form" on:submit=on_submit>
                <textarea
                    class="ask-form__input"
                    rows="3"
                    placeholder="Ask a question about Moroccan law"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="button button--primary"
                    type="submit"
                    disabled=move || { state.with(QaState::is_busy) || input.with(|v| v.trim().is_empty()) }
                >
                    {move || if state.with(QaState::is_busy) { "Thinking..." } else { "Ask" }}
                </button>
            </form>
            <div class="sample-questions">
                {SAMPLE_QUESTIONS
                    .into_iter()
                    .map(|question| {
                        view! {
                            <button
                                class="chip chip--button"
                                disabled=move || state.with(QaState::is_busy)
                                on:click=move |_| ask(question.to_owned())
                            >
                                {question}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || state.with(|s| s.pending.is_some())>
                <div class="qa-entry qa-entry--pending">
                    <p class="qa-entry__question">{move || state.with(|s| s.pending.clone().unwrap_or_default())}</p>
                    <p class="loading">"Searching the legal database..."</p>
                </div>
            </Show>
            <div class="qa-history">
                {move || {
                    state
                        .with(|s| s.history.clone())
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <article class="qa-entry" class:qa-entry--fallback=entry.fallback>
                                    <header class="qa-entry__header">
                                        <p class="qa-entry__question">{entry.question}</p>
                                        <time>{format_time(entry.answered_at)}</time>
                                    </header>
                                    <p class="qa-entry__answer">{entry.answer.answer_text}</p>
                                    <ConfidenceBadge confidence=entry.answer.confidence />
                                    <SourceList sources=entry.answer.sources />
                                    <LegalDisclaimer />
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
