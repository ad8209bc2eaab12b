//! Budget transparency: year and ministry filters, totals and allocations.

use leptos::prelude::*;
use records::budget::format_mad;
use records::{BudgetItem, BudgetSort, confidence_percent};

use super::{filter_options, spawn_list_load};
use crate::components::error_banner::ErrorBanner;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;
use crate::state::budget::{BudgetState, year_options};
use crate::state::loader::Fetch;
use crate::util::clock::current_year;

#[component]
pub fn BudgetPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let this_year = current_year();
    let state = RwSignal::new(BudgetState::for_year(this_year));
    let load = move |fetch: Option<Fetch>| {
        if let Some(fetch) = fetch {
            spawn_list_load(auth, state, fetch, BudgetState::resolve);
        }
    };

    Effect::new(move || load(state.try_update(BudgetState::refresh)));

    let error = Signal::derive(move || state.with(|s| s.list.error.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));
    let summary = Memo::new(move |_| state.with(BudgetState::summary));

    view! {
        <section class="budget">
            <h1 class="page-title">"Budget Transparency"</h1>
            <ErrorBanner message=error on_dismiss=dismiss />
            <div class="filters">
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.query.year.to_string())
                    on:change=move |ev| {
                        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                            load(state.try_update(|s| s.set_year(year)).flatten());
                        }
                    }
                >
                    {year_options(this_year)
                        .into_iter()
                        .map(|year| view! { <option value={year.to_string()}>{year}</option> })
                        .collect_view()}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.query.ministry.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        load(state.try_update(|s| s.set_ministry(&value)).flatten());
                    }
                >
                    {move || filter_options("All ministries", state.with(BudgetState::ministry_options))}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.sort.as_str())
                    on:change=move |ev| {
                        if let Some(sort) = BudgetSort::parse(&event_target_value(&ev)) {
                            state.update(|s| s.set_sort(sort));
                        }
                    }
                >
                    {BudgetSort::ALL
                        .into_iter()
                        .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="stat-grid">
                <StatCard label="Total budget" value=Signal::derive(move || format_mad(summary.get().total)) />
                <StatCard
                    label="Executed"
                    value=Signal::derive(move || format_mad(summary.get().executed))
                    hint="spent so far"
                />
                <StatCard label="Not yet executed" value=Signal::derive(move || format_mad(summary.get().pending)) />
                <StatCard
                    label="Execution rate"
                    value=Signal::derive(move || format!("{}%", confidence_percent(summary.get().execution_rate())))
                />
                <StatCard label="Ministries" value=Signal::derive(move || summary.get().ministries.to_string()) />
            </div>
            <Show when=move || state.with(|s| s.list.loading)>
                <p class="loading">"Loading budget data..."</p>
            </Show>
            <Show when=move || state.with(|s| s.list.is_empty_result())>
                <p class="empty-state">"No budget lines for this selection."</p>
            </Show>
            <div class="category-bars">
                <h2>"By category"</h2>
                {move || {
                    summary
                        .get()
                        .categories
                        .into_iter()
                        .map(|share| {
                            let pct = confidence_percent(share.share);
                            view! {
                                <div class="category-bars__row">
                                    <span class="category-bars__label">{share.category}</span>
                                    <div class="category-bars__track">
                                        <div class="category-bars__fill" style={format!("width: {pct}%")}></div>
                                    </div>
                                    <span class="category-bars__value">
                                        {format!("{} ({pct}%)", format_mad(share.amount))}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <table class="budget-table">
                <thead>
                    <tr>
                        <th>"Ministry"</th>
                        <th>"Program"</th>
                        <th>"Category"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.with(BudgetState::rows).into_iter().map(budget_row).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

fn budget_row(item: BudgetItem) -> impl IntoView {
    view! {
        <tr>
            <td>{item.ministry}</td>
            <td>{item.program}</td>
            <td>{item.category}</td>
            <td class="budget-table__amount">{format_mad(item.amount)}</td>
            <td>
                <span class={format!("badge badge--{}", item.status.as_str())}>{item.status.as_str()}</span>
            </td>
        </tr>
    }
}
