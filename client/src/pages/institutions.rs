//! Institutions directory with a detail panel for the selected body.

use leptos::prelude::*;
use records::Institution;

use super::{filter_options, spawn_list_load};
use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::state::institutions::InstitutionsState;
use crate::state::loader::Fetch;

#[component]
pub fn InstitutionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(InstitutionsState::default());
    let load = move |fetch: Option<Fetch>| {
        if let Some(fetch) = fetch {
            spawn_list_load(auth, state, fetch, InstitutionsState::resolve);
        }
    };

    Effect::new(move || load(state.try_update(InstitutionsState::refresh)));

    let error = Signal::derive(move || state.with(|s| s.list.error.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));

    view! {
        <section class="institutions">
            <h1 class="page-title">"Government Institutions"</h1>
            <ErrorBanner message=error on_dismiss=dismiss />
            <div class="filters">
                <input
                    class="filters__search"
                    type="search"
                    placeholder="Search by name, code or description"
                    prop:value=move || state.with(|s| s.query.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        load(state.try_update(|s| s.set_search(&value)).flatten());
                    }
                />
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.query.kind.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        load(state.try_update(|s| s.set_kind(&value)).flatten());
                    }
                >
                    {move || filter_options("All types", state.with(InstitutionsState::type_options))}
                </select>
            </div>
            <div class="chips">
                {move || {
                    state
                        .with(InstitutionsState::type_counts)
                        .into_iter()
                        .map(|(kind, count)| view! { <span class="chip">{format!("{kind}: {count}")}</span> })
                        .collect_view()
                }}
            </div>
            <Show when=move || state.with(|s| s.list.loading)>
                <p class="loading">"Loading institutions..."</p>
            </Show>
            <Show when=move || state.with(|s| s.list.is_empty_result())>
                <p class="empty-state">"No institutions match these filters."</p>
            </Show>
            <div class="master-detail">
                <ul class="master-detail__list">
                    {move || {
                        let selected = state.with(|s| s.selected);
                        state
                            .with(InstitutionsState::visible)
                            .into_iter()
                            .map(|institution| {
                                let id = institution.id;
                                view! {
                                    <li
                                        class="list-row"
                                        class:list-row--selected={selected == Some(id)}
                                        on:click=move |_| state.update(|s| s.select(Some(id)))
                                    >
                                        <strong>{institution.name}</strong>
                                        <span class="list-row__meta">
                                            {format!("{} · {}", institution.code, institution.kind)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <aside class="master-detail__detail">
                    {move || {
                        state
                            .with(|s| {
                                s.selected_institution().cloned().map(|i| {
                                    let parent = s.parent_name(&i);
                                    (i, parent)
                                })
                            })
                            .map(|(institution, parent)| {
                                view! {
                                    <InstitutionDetail
                                        institution=institution
                                        parent=parent
                                        on_close=Callback::new(move |()| state.update(|s| s.select(None)))
                                    />
                                }
                                    .into_any()
                            })
                            .unwrap_or_else(|| {
                                view! { <p class="empty-state">"Select an institution to see its details."</p> }
                                    .into_any()
                            })
                    }}
                </aside>
            </div>
        </section>
    }
}

#[component]
fn InstitutionDetail(institution: Institution, parent: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let contact = [
        ("Address", institution.address),
        ("Phone", institution.phone),
        ("Email", institution.email),
    ];
    view! {
        <div class="detail-card">
            <button class="detail-card__close" title="Close" on:click=move |_| on_close.run(())>
                "×"
            </button>
            <h2>{institution.name}</h2>
            <p class="detail-card__meta">{format!("{} · {}", institution.code, institution.kind)}</p>
            {parent.map(|name| view! { <p>"Part of " {name}</p> })}
            {institution.description.map(|text| view! { <p class="detail-card__body">{text}</p> })}
            <dl>
                {contact
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|value| (label, value)))
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()}
            </dl>
            {institution
                .website
                .map(|url| {
                    let href = url.clone();
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer">
                            {url}
                        </a>
                    }
                })}
        </div>
    }
}
