//! Dismissible error banner shown above page content.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                {on_dismiss
                    .map(|dismiss| {
                        view! {
                            <button
                                class="error-banner__close"
                                title="Dismiss"
                                on:click=move |_| dismiss.run(())
                            >
                                "×"
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}
