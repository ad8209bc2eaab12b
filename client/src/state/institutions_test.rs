use super::*;

fn loaded() -> InstitutionsState {
    let mut state = InstitutionsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(fixtures::institutions()));
    state
}

#[test]
fn default_request_has_no_query() {
    assert_eq!(InstitutionsState::default().request_path(), "/gov/institutions");
}

#[test]
fn filter_change_triggers_exactly_one_fetch() {
    let mut state = InstitutionsState::default();
    let fetch = state.set_kind("Agency").unwrap();
    assert_eq!(fetch.path, "/gov/institutions?type=Agency");
    assert!(state.set_kind("Agency").is_none());

    let fetch = state.set_search("digital").unwrap();
    assert_eq!(fetch.path, "/gov/institutions?search=digital&type=Agency");
    assert!(state.list.is_current(fetch.ticket));
}

#[test]
fn empty_response_shows_empty_state_not_fixtures() {
    let mut state = InstitutionsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(Vec::new()));
    assert!(state.list.is_empty_result());
    assert!(state.visible().is_empty());
}

#[test]
fn failure_falls_back_to_six_fixtures() {
    let mut state = InstitutionsState::default();
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Err(ApiError::Network("Network Error".to_owned())));
    assert_eq!(state.list.items.len(), 6);
    assert_eq!(state.list.error.as_deref(), Some("Failed to load institutions: Network Error"));
}

#[test]
fn visible_filters_client_side_on_search() {
    let mut state = loaded();
    state.query.search = "EDU".to_owned();
    let names: Vec<String> = state.visible().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Ministry of National Education".to_owned()]);
}

#[test]
fn types_and_counts_follow_loaded_rows() {
    let state = loaded();
    assert_eq!(state.type_options(), vec!["Ministry", "Agency", "Department"]);
    assert_eq!(state.type_counts()[0], ("Ministry".to_owned(), 4));
}

#[test]
fn selection_resolves_parent_and_survives_reload() {
    let mut state = loaded();
    state.select(Some(5));
    let selected = state.selected_institution().cloned().unwrap();
    assert_eq!(state.parent_name(&selected).as_deref(), Some("Ministry of Economy and Finance"));

    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(Vec::new()));
    assert!(state.selected.is_none());
}
