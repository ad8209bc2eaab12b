use super::*;
use records::{ReviewCategory, ReviewStatus};

fn filled_form() -> NewReview {
    NewReview {
        institution: "Ministry of Health".to_owned(),
        official_name: Some("  ".to_owned()),
        rating: 4,
        title: "Quick service".to_owned(),
        content: "Appointment booked online in minutes.".to_owned(),
        category: ReviewCategory::Service,
        is_anonymous: true,
    }
}

fn created(id: i64) -> Review {
    Review {
        id,
        institution: "Ministry of Health".to_owned(),
        official_name: None,
        rating: 4,
        title: "Quick service".to_owned(),
        content: "Appointment booked online in minutes.".to_owned(),
        category: ReviewCategory::Service,
        status: ReviewStatus::Pending,
        user_name: None,
        is_anonymous: true,
        created_at: "2024-06-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn default_request_always_sends_sort() {
    assert_eq!(ReviewsState::default().request_path(), "/reviews?sort=newest");
}

#[test]
fn filter_changes_each_trigger_one_fetch() {
    let mut state = ReviewsState::default();
    let fetch = state.set_category("corruption").unwrap();
    assert_eq!(fetch.path, "/reviews?category=corruption&sort=newest");
    assert!(state.set_category("corruption").is_none());

    let fetch = state.set_sort(ReviewSort::Highest).unwrap();
    assert_eq!(fetch.path, "/reviews?category=corruption&sort=highest");

    let fetch = state.set_institution("Ministry of Health").unwrap();
    assert_eq!(fetch.path, "/reviews?institution=Ministry%20of%20Health&category=corruption&sort=highest");
}

#[test]
fn failure_falls_back_to_fixture_reviews_and_stats() {
    let mut state = ReviewsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Err(ApiError::Network("timeout".to_owned())));
    assert_eq!(state.list.items.len(), 4);
    assert_eq!(state.stats().total, 4);
    assert_eq!(state.list.error.as_deref(), Some("Failed to load reviews: timeout"));
}

#[test]
fn invalid_form_is_not_submitted() {
    let mut state = ReviewsState::default();
    assert!(state.begin_submit().is_none());
    assert_eq!(state.form_error.as_deref(), Some("invalid institution: required"));
    assert!(!state.submitting);
}

#[test]
fn created_review_appears_first_without_reload() {
    let mut state = ReviewsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(fixtures::reviews()));
    state.form = filled_form();
    state.show_form = true;

    let payload = state.begin_submit().unwrap();
    assert!(payload.official_name.is_none());
    assert!(state.begin_submit().is_none());

    state.finish_submit(Ok(created(99)));
    assert_eq!(state.list.items[0].id, 99);
    assert_eq!(state.form, NewReview::default());
    assert!(!state.show_form);
    assert!(!state.submitting);
}

#[test]
fn partial_echo_counts_as_created() {
    let mut state = ReviewsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(vec![created(1)]));
    state.form = filled_form();
    let payload = state.begin_submit().unwrap();

    let echo = serde_json::json!({ "id": 42, "rating": 4, "status": "pending" });
    state.finish_submit(Ok(payload.into_created(echo)));
    assert!(state.form_error.is_none());
    assert!(!state.show_form);
    assert_eq!(state.list.items.len(), 2);
    assert_eq!(state.list.items[0].id, 42);
    assert_eq!(state.list.items[0].title, "Quick service");
}

#[test]
fn failed_submission_keeps_form() {
    let mut state = ReviewsState::default();
    state.form = filled_form();
    state.begin_submit();
    state.finish_submit(Err(ApiError::from_status(401, "")));
    assert_eq!(state.form_error.as_deref(), Some(SUBMIT_FAILED));
    assert_eq!(state.form.title, "Quick service");
}

#[test]
fn institution_options_merge_loaded_and_form_names() {
    let mut state = ReviewsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(vec![created(1)]));
    let options = state.institution_options();
    assert_eq!(options[0], "Ministry of Health");
    assert_eq!(options.iter().filter(|o| *o == "Ministry of Health").count(), 1);
    assert_eq!(options.len(), 5);
}
