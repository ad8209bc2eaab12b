use super::*;

fn institution(id: i64, name: &str, code: &str, kind: &str) -> Institution {
    Institution {
        id,
        code: code.to_owned(),
        name: name.to_owned(),
        kind: kind.to_owned(),
        parent_id: None,
        description: None,
        address: None,
        phone: None,
        email: None,
        website: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn institution_deserializes_type_field_and_optional_contacts() {
    let raw = serde_json::json!({
        "id": 5,
        "code": "AGY-DIGITAL-001",
        "name": "Digital Development Agency",
        "type": "Agency",
        "parent_id": 4,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    });
    let parsed: Institution = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.kind, "Agency");
    assert_eq!(parsed.parent_id, Some(4));
    assert!(parsed.website.is_none());
}

#[test]
fn matches_is_case_insensitive_across_name_code_and_description() {
    let mut health = institution(1, "Ministry of Health", "MIN-HEALTH-001", "Ministry");
    health.description = Some("Public health policy".to_owned());
    assert!(health.matches("health"));
    assert!(health.matches("min-health"));
    assert!(health.matches("POLICY"));
    assert!(health.matches("  "));
    assert!(!health.matches("finance"));
}

#[test]
fn query_skips_all_type_and_blank_search() {
    assert!(InstitutionQuery::default().to_query().is_empty());
    let query = InstitutionQuery { search: "santé".to_owned(), kind: "Agency".to_owned() };
    assert_eq!(query.to_query().encode(), "search=sant%C3%A9&type=Agency");
}

#[test]
fn types_and_counts_follow_first_seen_order() {
    let items = vec![
        institution(1, "A", "A", "Ministry"),
        institution(2, "B", "B", "Agency"),
        institution(3, "C", "C", "Ministry"),
    ];
    assert_eq!(institution_types(&items), vec!["Ministry".to_owned(), "Agency".to_owned()]);
    assert_eq!(count_by_type(&items), vec![("Ministry".to_owned(), 2), ("Agency".to_owned(), 1)]);
}
