use super::*;

#[test]
fn each_filter_change_reflects_in_query_string() {
    let mut state = LawsState::default();
    assert_eq!(state.request_path(), "/legal/laws");

    let fetch = state.set_filter(LawFilter::Text, "travail").unwrap();
    assert_eq!(fetch.path, "/legal/laws?q=travail");

    let fetch = state.set_filter(LawFilter::From, "2020-01-01").unwrap();
    assert_eq!(fetch.path, "/legal/laws?q=travail&from=2020-01-01");

    assert!(state.set_filter(LawFilter::From, "2020-01-01").is_none());
}

#[test]
fn failure_shows_fixture_laws_with_banner() {
    let mut state = LawsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Err(ApiError::from_status(503, "")));
    assert!(!state.list.items.is_empty());
    assert_eq!(state.list.error.as_deref(), Some("Failed to load laws: Request failed with status code 503"));
}

#[test]
fn toggle_opens_and_closes_detail() {
    let mut state = LawsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(fixtures::laws()));

    state.toggle(1);
    assert_eq!(state.selected_law().map(|l| l.articles.len()), Some(2));
    state.toggle(1);
    assert!(state.selected_law().is_none());
}
