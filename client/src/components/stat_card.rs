//! Headline number tile used by the dashboard, reviews and budget pages.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <strong class="stat-card__value">{move || value.get()}</strong>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}
