//! Citizen reviews: filters, headline stats, the list and the submit form.

use leptos::prelude::*;
use records::reviews::stars;
use records::{ALL, Review, ReviewCategory, ReviewSort};

use super::{filter_options, spawn_list_load};
use crate::components::error_banner::ErrorBanner;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loader::Fetch;
use crate::state::reviews::{FORM_INSTITUTIONS, ReviewsState};
use crate::util::auth::drop_session_on_unauthorized;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(ReviewsState::default());
    let load = move |fetch: Option<Fetch>| {
        if let Some(fetch) = fetch {
            spawn_list_load(auth, state, fetch, ReviewsState::resolve);
        }
    };

    Effect::new(move || load(state.try_update(ReviewsState::refresh)));

    let error = Signal::derive(move || state.with(|s| s.list.error.clone()));
    let dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));
    let stats = Memo::new(move |_| state.with(ReviewsState::stats));

    view! {
        <section class="reviews">
            <header class="reviews__header">
                <h1 class="page-title">"Citizen Reviews"</h1>
                <button class="button button--primary" on:click=move |_| state.update(ReviewsState::toggle_form)>
                    {move || if state.with(|s| s.show_form) { "Cancel" } else { "Write a review" }}
                </button>
            </header>
            <ErrorBanner message=error on_dismiss=dismiss />
            <div class="stat-grid">
                <StatCard label="Reviews" value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard
                    label="Average rating"
                    value=Signal::derive(move || format!("{:.1}", stats.get().average_rating))
                    hint="out of 5"
                />
                <StatCard label="Approved" value=Signal::derive(move || stats.get().approved.to_string()) />
                <StatCard label="Pending" value=Signal::derive(move || stats.get().pending.to_string()) />
            </div>
            <Show when=move || state.with(|s| s.show_form)>
                <ReviewForm state=state auth=auth />
            </Show>
            <div class="filters">
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.query.institution.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        load(state.try_update(|s| s.set_institution(&value)).flatten());
                    }
                >
                    {move || filter_options("All institutions", state.with(ReviewsState::institution_options))}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.query.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        load(state.try_update(|s| s.set_category(&value)).flatten());
                    }
                >
                    <option value=ALL>"All categories"</option>
                    {ReviewCategory::ALL
                        .into_iter()
                        .map(|category| view! { <option value=category.as_str()>{category.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || state.with(|s| s.query.sort.as_str())
                    on:change=move |ev| {
                        if let Some(sort) = ReviewSort::parse(&event_target_value(&ev)) {
                            load(state.try_update(|s| s.set_sort(sort)).flatten());
                        }
                    }
                >
                    {ReviewSort::ALL
                        .into_iter()
                        .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || state.with(|s| s.list.loading)>
                <p class="loading">"Loading reviews..."</p>
            </Show>
            <Show when=move || state.with(|s| s.list.is_empty_result())>
                <p class="empty-state">"No reviews yet. Be the first to write one."</p>
            </Show>
            <div class="review-list">
                {move || {
                    state
                        .with(|s| s.list.items.clone())
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let author = review.author().to_owned();
    let date = review.created_at.split('T').next().unwrap_or_default().to_owned();
    view! {
        <article class="review-card">
            <header class="review-card__header">
                <span class="review-card__stars" title={format!("{}/5", review.rating)}>
                    {stars(review.rating)}
                </span>
                <span class={format!("badge badge--{}", review.status.as_str())}>{review.status.as_str()}</span>
            </header>
            <h3>{review.title}</h3>
            <p class="review-card__meta">
                {review.institution}
                {review.official_name.map(|name| format!(" · {name}"))}
                {format!(" · {}", review.category.label())}
            </p>
            <p>{review.content}</p>
            <footer class="review-card__footer">{format!("{author} · {date}")}</footer>
        </article>
    }
}

#[component]
fn ReviewForm(state: RwSignal<ReviewsState>, auth: RwSignal<AuthState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = state.try_update(ReviewsState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = api::create_review(&payload).await;
            if let Err(error) = &outcome {
                drop_session_on_unauthorized(auth, error);
            }
            state.update(|s| s.finish_submit(outcome));
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <Show when=move || state.with(|s| s.form_error.is_some())>
                <p class="form-error">{move || state.with(|s| s.form_error.clone().unwrap_or_default())}</p>
            </Show>
            <label>
                "Institution"
                <select
                    prop:value=move || state.with(|s| s.form.institution.clone())
                    on:change=move |ev| state.update(|s| s.form.institution = event_target_value(&ev))
                >
                    <option value="">"Choose an institution"</option>
                    {FORM_INSTITUTIONS
                        .into_iter()
                        .map(|name| view! { <option value=name>{name}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Official (optional)"
                <input
                    type="text"
                    prop:value=move || state.with(|s| s.form.official_name.clone().unwrap_or_default())
                    on:input=move |ev| state.update(|s| s.form.official_name = Some(event_target_value(&ev)))
                />
            </label>
            <label>
                "Rating"
                <select
                    prop:value=move || state.with(|s| s.form.rating.to_string())
                    on:change=move |ev| {
                        if let Ok(rating) = event_target_value(&ev).parse::<u8>() {
                            state.update(|s| s.form.rating = rating);
                        }
                    }
                >
                    {(1..=5u8)
                        .rev()
                        .map(|rating| view! { <option value={rating.to_string()}>{stars(rating)}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Category"
                <select
                    prop:value=move || state.with(|s| s.form.category.as_str())
                    on:change=move |ev| {
                        if let Some(category) = ReviewCategory::parse(&event_target_value(&ev)) {
                            state.update(|s| s.form.category = category);
                        }
                    }
                >
                    {ReviewCategory::ALL
                        .into_iter()
                        .map(|category| view! { <option value=category.as_str()>{category.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || state.with(|s| s.form.title.clone())
                    on:input=move |ev| state.update(|s| s.form.title = event_target_value(&ev))
                />
            </label>
            <label>
                "Review"
                <textarea
                    rows="4"
                    prop:value=move || state.with(|s| s.form.content.clone())
                    on:input=move |ev| state.update(|s| s.form.content = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.form.is_anonymous)
                    on:change=move |ev| state.update(|s| s.form.is_anonymous = event_target_checked(&ev))
                />
                "Post anonymously"
            </label>
            <button class="button button--primary" type="submit" disabled=move || state.with(|s| s.submitting)>
                {move || if state.with(|s| s.submitting) { "Submitting..." } else { "Submit review" }}
            </button>
        </form>
    }
}
