//! AI chat: chronological transcript with feedback on each answer.

use leptos::logging::warn;
use leptos::prelude::*;
use records::FeedbackType;

use crate::components::answer::{ConfidenceBadge, SourceList};
use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatMessage, ChatState, Role};
use crate::util::auth::drop_session_on_unauthorized;
use crate::util::clock::{format_time, now_ms};

#[component]
pub fn AiChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let question = input.get_untracked();
        let Some(request) = state.try_update(|s| s.submit(&question, now_ms())).flatten() else {
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

    let on_feedback = Callback::new(move |(id, feedback): (String, FeedbackType)| {
        let Some(request) = state.try_update(|s| s.give_feedback(&id, feedback)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(error) = api::send_feedback(&request).await {
                warn!("feedback for {} failed: {error}", request.query_id);
            }
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.error = None));

    view! {
        <section class="ai-chat">
            <header class="ai-chat__header">
                <h1 class="page-title">"AI Legal Chat"</h1>
                <button
                    class="button button--ghost"
                    disabled=move || state.with(|s| s.pending || s.messages.is_empty())
                    on:click=move |_| state.update(ChatState::clear)
                >
                    "Clear conversation"
                </button>
            </header>
            <ErrorBanner message=error on_dismiss=dismiss />
            <div class="chat-log">
                <Show when=move || state.with(|s| s.messages.is_empty())>
                    <p class="empty-state">"Ask the assistant anything about Moroccan law."</p>
                </Show>
                <For
                    each=move || state.with(|s| s.messages.clone())
                    key=|message| (message.id.clone(), message.feedback)
                    children=move |message: ChatMessage| {
                        view! { <ChatBubble message=message on_feedback=on_feedback /> }
                    }
                />
                <Show when=move || state.with(|s| s.pending)>
                    <div class="chat-bubble chat-bubble--assistant chat-bubble--typing">"..."</div>
                </Show>
            </div>
            <form class="chat-form" on:submit=on_submit>
                <input
                    class="chat-form__input"
                    type="text"
                    placeholder="Type your question"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="button button--primary"
                    type="submit"
                    disabled=move || { state.with(|s| s.pending) || input.with(|v| v.trim().is_empty()) }
                >
                    "Send"
                </button>
            </form>
        </section>
    }
}

#[component]
fn ChatBubble(message: ChatMessage, on_feedback: Callback<(String, FeedbackType)>) -> impl IntoView {
    let is_user = message.role == Role::User;
    let feedback = message.accepts_feedback().then(|| {
        let id = message.id.clone();
        FeedbackType::ALL
            .into_iter()
            .map(|kind| {
                let id = id.clone();
                view! {
                    <button class="chip chip--button" on:click=move |_| on_feedback.run((id.clone(), kind))>
                        {kind.label()}
                    </button>
                }
            })
            .collect_view()
    });
    let given = message.feedback.map(|kind| view! { <span class="chat-bubble__feedback">{format!("Feedback: {}", kind.label())}</span> });

    view! {
        <div class="chat-bubble" class:chat-bubble--user=is_user class:chat-bubble--assistant={!is_user}>
            <p class="chat-bubble__text">{message.content}</p>
            {message.confidence.map(|confidence| view! { <ConfidenceBadge confidence=confidence /> })}
            <SourceList sources=message.sources />
            <div class="chat-bubble__footer">
                <time>{format_time(message.sent_at)}</time>
                {feedback}
                {given}
            </div>
        </div>
    }
}
