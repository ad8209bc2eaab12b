//! Legal repository: laws with an articles panel for the open law.

use leptos::prelude::*;
use records::Law;

use super::spawn_list_load;
use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::state::laws::{LawFilter, LawsState};
use crate::state::loader::Fetch;

#[component]
pub fn LegalPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(LawsState::default());
    let load = move |fetch: Option<Fetch>| {
        if let Some(fetch) = fetch {
            spawn_list_load(auth, state, fetch, LawsState::resolve);
        }
    };

    Effect::new(move || load(state.try_update(LawsState::refresh)));

    let error = Signal::derive(move || state.with(|s| s.list.error.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));
    let filter_input = move |filter: LawFilter, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="filters__input"
                type=kind
                placeholder=placeholder
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    load(state.try_update(|s| s.set_filter(filter, &value)).flatten());
                }
            />
        }
    };

    view! {
        <section class="legal">
            <h1 class="page-title">"Legal Repository"</h1>
            <ErrorBanner message=error on_dismiss=dismiss />
            <div class="filters">
                {filter_input(LawFilter::Text, "search", "Search laws")}
                {filter_input(LawFilter::From, "date", "From")}
                {filter_input(LawFilter::To, "date", "To")}
                {filter_input(LawFilter::Category, "text", "Category")}
                {filter_input(LawFilter::Ministry, "text", "Ministry")}
            </div>
            <Show when=move || state.with(|s| s.list.loading)>
                <p class="loading">"Loading laws..."</p>
            </Show>
            <Show when=move || state.with(|s| s.list.is_empty_result())>
                <p class="empty-state">"No laws found."</p>
            </Show>
            <div class="master-detail">
                <ul class="master-detail__list">
                    {move || {
                        let selected = state.with(|s| s.selected);
                        state
                            .with(|s| s.list.items.clone())
                            .into_iter()
                            .map(|law| {
                                let id = law.law_id;
                                view! {
                                    <li
                                        class="list-row"
                                        class:list-row--selected={selected == Some(id)}
                                        on:click=move |_| state.update(|s| s.toggle(id))
                                    >
                                        <strong>{format!("Law {}", law.law_number)}</strong>
                                        <span>{law.title}</span>
                                        <span class="list-row__meta">
                                            {format!("Effective {}", law.effective_date)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <aside class="master-detail__detail">
                    {move || match state.with(|s| s.selected_law().cloned()) {
                        Some(law) => view! { <LawDetail law=law /> }.into_any(),
                        None => {
                            view! { <p class="empty-state">"Select a law to read its articles."</p> }
                                .into_any()
                        }
                    }}
                </aside>
            </div>
        </section>
    }
}

#[component]
fn LawDetail(law: Law) -> impl IntoView {
    view! {
        <div class="detail-card">
            <h2>{format!("Law {}", law.law_number)}</h2>
            <p class="detail-card__meta">{law.title}</p>
            <p class="detail-card__meta">
                {format!("Issued {} · Effective {}", law.issue_date, law.effective_date)}
            </p>
            {law
                .source_url
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer">
                            "Official source"
                        </a>
                    }
                })}
            <ol class="articles">
                {law
                    .articles
                    .into_iter()
                    .map(|article| {
                        view! {
                            <li class="articles__item">
                                <h3>{format!("Article {}", article.article_number)}</h3>
                                <p>{article.content}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
