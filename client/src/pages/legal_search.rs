//! Paginated legal search with debounced filters.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::laws::LawFilter;
use crate::state::legal_search::{DebounceTicket, LegalSearchState, SEARCH_DEBOUNCE};
use crate::util::auth::drop_session_on_unauthorized;
use crate::util::timer;

#[component]
pub fn LegalSearchPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(LegalSearchState::default());

    // Wait out the debounce, then search if this edit is still the latest.
    let schedule = move |ticket: Option<DebounceTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        leptos::task::spawn_local(async move {
            timer::sleep(SEARCH_DEBOUNCE).await;
            let Some(fetch) = state.try_update(|s| s.settle(ticket)).flatten() else {
                return;
            };
            let outcome = api::fetch_page(&fetch.path).await;
            if let Err(error) = &outcome {
                drop_session_on_unauthorized(auth, error);
            }
            state.update(|s| s.resolve(fetch.ticket, outcome));
        });
    };

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_law_categories().await;
            state.update(|s| s.set_categories(outcome));
        });
    });

    let error = Signal::derive(move || state.with(|s| s.list.error.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));
    let on_filter = move |filter: LawFilter| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            schedule(state.try_update(|s| s.set_filter(filter, &value)).flatten());
        }
    };
    let filter_value = move |filter: LawFilter| {
        move || {
            state.with(|s| match filter {
                LawFilter::Text => s.query.q.clone(),
                LawFilter::From => s.query.from.clone(),
                LawFilter::To => s.query.to.clone(),
                LawFilter::Category => s.query.category.clone(),
                LawFilter::Ministry => s.query.ministry.clone(),
            })
        }
    };

    view! {
        <section class="legal-search">
            <h1 class="page-title">"Legal Search"</h1>
            <ErrorBanner message=error on_dismiss=dismiss />
            <div class="filters">
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Search laws by keyword"
                    prop:value=filter_value(LawFilter::Text)
                    on:input=on_filter(LawFilter::Text)
                />
                <button
                    class="button button--ghost"
                    on:click=move |_| state.update(|s| s.show_filters = !s.show_filters)
                >
                    {move || if state.with(|s| s.show_filters) { "Hide filters" } else { "More filters" }}
                </button>
                <button
                    class="button button--ghost"
                    on:click=move |_| schedule(state.try_update(LegalSearchState::clear_filters).flatten())
                >
                    "Clear"
                </button>
            </div>
            <Show when=move || state.with(|s| s.show_filters)>
                <div class="filters filters--advanced">
                    <label>
                        "From"
                        <input
                            type="date"
                            prop:value=filter_value(LawFilter::From)
                            on:input=on_filter(LawFilter::From)
                        />
                    </label>
                    <label>
                        "To"
                        <input
                            type="date"
                            prop:value=filter_value(LawFilter::To)
                            on:input=on_filter(LawFilter::To)
                        />
                    </label>
                    <label>
                        "Category"
                        <select prop:value=filter_value(LawFilter::Category) on:change=on_filter(LawFilter::Category)>
                            <option value="">"Any category"</option>
                            {move || {
                                state
                                    .with(|s| s.categories.clone())
                                    .into_iter()
                                    .map(|category| {
                                        let value = category.clone();
                                        view! { <option value=value>{category}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label>
                        "Ministry"
                        <input
                            type="text"
                            prop:value=filter_value(LawFilter::Ministry)
                            on:input=on_filter(LawFilter::Ministry)
                        />
                    </label>
                </div>
            </Show>
            <Show when=move || state.with(|s| s.query.is_blank() && !s.list.loading)>
                <p class="empty-state">"Enter a keyword or choose a filter to search."</p>
            </Show>
            <Show when=move || state.with(|s| s.list.loading)>
                <p class="loading">"Searching..."</p>
            </Show>
            <Show when=move || state.with(|s| s.list.is_empty_result())>
                <p class="empty-state">"No laws match your search."</p>
            </Show>
            <ul class="results">
                {move || {
                    state
                        .with(|s| s.list.items.clone())
                        .into_iter()
                        .map(|law| {
                            let dates = [
                                law.publication_date.map(|d| format!("Published {d}")),
                                law.effective_date.map(|d| format!("Effective {d}")),
                                law.category,
                            ];
                            let meta = dates.into_iter().flatten().collect::<Vec<_>>().join(" · ");
                            view! {
                                <li class="results__item">
                                    <strong>{format!("Law {}", law.law_number)}</strong>
                                    <span>{law.title}</span>
                                    <span class="list-row__meta">{meta}</span>
                                    {law
                                        .pdf_url
                                        .map(|url| {
                                            view! {
                                                <a href=url target="_blank" rel="noopener noreferrer">
                                                    "PDF"
                                                </a>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || state.with(|s| s.total_pages() > 1)>
                <nav class="pagination">
                    <button
                        class="button"
                        disabled=move || !state.with(LegalSearchState::has_previous)
                        on:click=move |_| {
                            let page = state.with_untracked(LegalSearchState::page).saturating_sub(1);
                            schedule(state.try_update(|s| s.set_page(page)).flatten());
                        }
                    >
                        "Previous"
                    </button>
                    <span class="pagination__label">
                        {move || {
                            state.with(|s| format!("Page {} of {} ({} laws)", s.page(), s.total_pages(), s.list.total))
                        }}
                    </span>
                    <button
                        class="button"
                        disabled=move || !state.with(LegalSearchState::has_next)
                        on:click=move |_| {
                            let page = state.with_untracked(LegalSearchState::page) + 1;
                            schedule(state.try_update(|s| s.set_page(page)).flatten());
                        }
                    >
                        "Next"
                    </button>
                </nav>
            </Show>
        </section>
    }
}
