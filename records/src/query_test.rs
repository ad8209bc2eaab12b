use super::*;

#[test]
fn empty_query_leaves_path_untouched() {
    let query = QueryString::new();
    assert!(query.is_empty());
    assert_eq!(query.append_to("/gov/institutions"), "/gov/institutions");
}

#[test]
fn push_skips_blank_values_and_trims() {
    let mut query = QueryString::new();
    query.push("q", "  ").push("from", " 2024-01-01 ");
    assert_eq!(query.pairs(), &[("from", "2024-01-01".to_owned())]);
}

#[test]
fn push_filter_treats_all_as_unset() {
    let mut query = QueryString::new();
    query.push_filter("type", ALL).push_filter("category", "service");
    assert_eq!(query.encode(), "category=service");
}

#[test]
fn encode_percent_encodes_values_in_insertion_order() {
    let mut query = QueryString::new();
    query.push("search", "santé publique").push_opt("page", Some(2));
    assert_eq!(query.encode(), "search=sant%C3%A9%20publique&page=2");
}

#[test]
fn push_opt_skips_none() {
    let mut query = QueryString::new();
    query.push_opt::<u32>("page", None);
    assert!(query.is_empty());
}

#[test]
fn append_to_adds_question_mark_once() {
    let mut query = QueryString::new();
    query.push("year", "2024");
    assert_eq!(query.append_to("/budget/items"), "/budget/items?year=2024");
}
