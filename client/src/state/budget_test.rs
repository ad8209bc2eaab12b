use super::*;

fn loaded(year: i32) -> BudgetState {
    let mut state = BudgetState::for_year(year);
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Ok(fixtures::budget_items()));
    state
}

#[test]
fn request_carries_year_and_ministry() {
    let mut state = BudgetState::for_year(2025);
    assert_eq!(state.request_path(), "/budget/items?year=2025");
    let fetch = state.set_ministry("Ministry of Health").unwrap();
    assert_eq!(fetch.path, "/budget/items?year=2025&ministry=Ministry%20of%20Health");
    let fetch = state.set_year(2024).unwrap();
    assert_eq!(fetch.path, "/budget/items?year=2024&ministry=Ministry%20of%20Health");
    assert!(state.set_year(2024).is_none());
}

#[test]
fn sort_is_local() {
    let mut state = loaded(2024);
    state.set_sort(BudgetSort::AmountAsc);
    assert!(!state.list.loading);
    assert_eq!(state.rows().first().map(|r| r.id), Some(4));
}

#[test]
fn ministry_filter_narrows_rows_and_summary() {
    let mut state = loaded(2024);
    state.set_ministry("Ministry of Health");
    assert_eq!(state.rows().len(), 1);
    assert!((state.summary().total - 2_500_000_000.0).abs() < 1.0);
    assert_eq!(state.ministry_options().len(), 5);
}

#[test]
fn failure_uses_fixture_budget() {
    let mut state = BudgetState::for_year(2024);
    let fetch = state.refresh();
    state.resolve(fetch.ticket, Err(ApiError::Network("Network Error".to_owned())));
    assert_eq!(state.rows().len(), 5);
    assert_eq!(state.list.error.as_deref(), Some("Failed to load budget data: Network Error"));
}

#[test]
fn year_options_end_at_current_year() {
    assert_eq!(year_options(2026), vec![2026, 2025, 2024, 2023, 2022]);
}
