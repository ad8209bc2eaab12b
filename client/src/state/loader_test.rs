use super::*;

fn fallback() -> Vec<&'static str> {
    vec!["mock-a", "mock-b"]
}

#[test]
fn success_replaces_items_and_clears_error() {
    let mut state = ListState::default();
    let ticket = state.begin();
    assert!(state.loading);
    assert!(state.resolve(ticket, Ok(vec!["live"]), "institutions", fallback));
    assert_eq!(state.items, vec!["live"]);
    assert_eq!(state.total, 1);
    assert_eq!(state.source, DataSource::Live);
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[test]
fn failure_uses_fallback_and_sets_banner() {
    let mut state = ListState::default();
    let ticket = state.begin();
    let err = ApiError::from_status(500, r#"{"detail":"database offline"}"#);
    state.resolve(ticket, Err(err), "institutions", fallback);
    assert_eq!(state.items, fallback());
    assert_eq!(state.source, DataSource::Fallback);
    assert_eq!(state.error.as_deref(), Some("Failed to load institutions: database offline"));
    assert!(!state.is_empty_result());
}

#[test]
fn empty_success_is_not_fallback() {
    let mut state: ListState<&str> = ListState::default();
    let ticket = state.begin();
    state.resolve(ticket, Ok(Vec::new()), "institutions", fallback);
    assert!(state.items.is_empty());
    assert!(state.is_empty_result());
    assert!(state.error.is_none());
}

#[test]
fn stale_ticket_is_discarded() {
    let mut state = ListState::default();
    let old = state.begin();
    let new = state.begin();
    assert!(state.resolve(new, Ok(vec!["new"]), "reviews", fallback));
    assert!(!state.resolve(old, Ok(vec!["old"]), "reviews", fallback));
    assert_eq!(state.items, vec!["new"]);
}

#[test]
fn stale_response_arriving_first_does_not_clear_loading() {
    let mut state = ListState::default();
    let old = state.begin();
    let _new = state.begin();
    assert!(!state.resolve(old, Err(ApiError::Network("x".to_owned())), "budget items", fallback));
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.source, DataSource::Pending);
}

#[test]
fn page_resolution_keeps_server_total() {
    let mut state = ListState::default();
    let ticket = state.begin();
    state.resolve_page(ticket, Ok((vec!["a", "b"], 120)), "laws", Vec::new);
    assert_eq!(state.total, 120);
}

#[test]
fn prepend_puts_item_first() {
    let mut state = ListState::default();
    let ticket = state.begin();
    state.resolve(ticket, Ok(vec!["older"]), "reviews", fallback);
    state.prepend("created");
    assert_eq!(state.items, vec!["created", "older"]);
    assert_eq!(state.total, 2);
}

#[test]
fn reset_abandons_in_flight_load() {
    let mut state = ListState::default();
    let ticket = state.begin();
    state.reset();
    assert!(!state.loading);
    assert!(!state.resolve(ticket, Ok(vec!["late"]), "laws", fallback));
    assert!(state.items.is_empty());
}
