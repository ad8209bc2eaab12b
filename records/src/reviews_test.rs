use super::*;

fn review(id: i64, institution: &str, rating: u8, status: ReviewStatus) -> Review {
    Review {
        id,
        institution: institution.to_owned(),
        official_name: None,
        rating,
        title: "t".to_owned(),
        content: "c".to_owned(),
        category: ReviewCategory::Service,
        status,
        user_name: Some("Fatima Alami".to_owned()),
        is_anonymous: false,
        created_at: "2024-01-15T10:30:00Z".to_owned(),
    }
}

#[test]
fn review_deserializes_lowercase_enums() {
    let raw = serde_json::json!({
        "id": 3,
        "institution": "Ministry of Interior",
        "official_name": "Col. Youssef Idrissi",
        "rating": 3,
        "title": "Slow Response Time",
        "content": "...",
        "category": "responsiveness",
        "status": "approved",
        "created_at": "2024-01-13T09:20:00Z",
        "is_anonymous": false
    });
    let parsed: Review = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.category, ReviewCategory::Responsiveness);
    assert_eq!(parsed.status, ReviewStatus::Approved);
    assert_eq!(parsed.author(), "Anonymous");
}

#[test]
fn author_hides_name_for_anonymous_reviews() {
    let mut r = review(1, "A", 4, ReviewStatus::Approved);
    assert_eq!(r.author(), "Fatima Alami");
    r.is_anonymous = true;
    assert_eq!(r.author(), "Anonymous");
}

#[test]
fn stars_clamps_to_five() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn new_review_validation_reports_first_missing_field() {
    let mut draft = NewReview::default();
    assert_eq!(draft.validate(), Err(RecordsError::Invalid { field: "institution", reason: "required" }));
    draft.institution = "Ministry of Health".to_owned();
    draft.rating = 0;
    assert_eq!(
        draft.validate(),
        Err(RecordsError::Invalid { field: "rating", reason: "must be between 1 and 5" })
    );
    draft.rating = 4;
    draft.title = "Great".to_owned();
    assert_eq!(draft.validate(), Err(RecordsError::Invalid { field: "content", reason: "required" }));
    draft.content = "Fast service".to_owned();
    assert!(draft.validate().is_ok());
}

#[test]
fn new_review_omits_missing_official() {
    let draft = NewReview { institution: "X".to_owned(), ..NewReview::default() };
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("official_name").is_none());
    assert_eq!(json["category"], "service");
}

#[test]
fn query_always_sends_sort() {
    assert_eq!(ReviewQuery::default().to_query().encode(), "sort=newest");
    let query = ReviewQuery {
        institution: "Ministry of Health".to_owned(),
        category: "corruption".to_owned(),
        sort: ReviewSort::Highest,
    };
    assert_eq!(query.to_query().encode(), "institution=Ministry%20of%20Health&category=corruption&sort=highest");
}

#[test]
fn stats_average_and_status_counts() {
    let reviews = vec![
        review(1, "A", 4, ReviewStatus::Approved),
        review(2, "B", 5, ReviewStatus::Approved),
        review(3, "A", 3, ReviewStatus::Pending),
    ];
    let stats = ReviewStats::from_reviews(&reviews);
    assert_eq!(stats.total, 3);
    assert!((stats.average_rating - 4.0).abs() < f64::EPSILON);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.approved, 2);
    assert_eq!(reviewed_institutions(&reviews), vec!["A".to_owned(), "B".to_owned()]);
}

#[test]
fn stats_of_empty_list_are_zero() {
    assert_eq!(ReviewStats::from_reviews(&[]), ReviewStats::default());
}

#[test]
fn category_and_sort_parse_round_trip() {
    for category in ReviewCategory::ALL {
        assert_eq!(ReviewCategory::parse(category.as_str()), Some(category));
    }
    assert_eq!(ReviewSort::parse("lowest"), Some(ReviewSort::Lowest));
    assert_eq!(ReviewSort::parse("random"), None);
}

#[test]
fn sort_labels_read_as_select_options() {
    assert_eq!(ReviewSort::default(), ReviewSort::Newest);
    assert_eq!(ReviewSort::Newest.label(), "Newest first");
    assert_eq!(ReviewSort::Lowest.label(), "Lowest rated");
}

fn submitted() -> NewReview {
    NewReview {
        institution: "Ministry of Interior".to_owned(),
        official_name: None,
        rating: 4,
        title: "Slow service".to_owned(),
        content: "Slow service".to_owned(),
        category: ReviewCategory::Responsiveness,
        is_anonymous: false,
    }
}

#[test]
fn partial_echo_keeps_submitted_fields() {
    let echo = serde_json::json!({
        "id": 42,
        "user_id": 7,
        "official_id": 3,
        "rating": 4,
        "content": "Slow service",
        "status": "pending",
        "created_at": "2024-05-01T10:00:00"
    });
    let review = submitted().into_created(echo);
    assert_eq!(review.id, 42);
    assert_eq!(review.institution, "Ministry of Interior");
    assert_eq!(review.title, "Slow service");
    assert_eq!(review.category, ReviewCategory::Responsiveness);
    assert_eq!(review.status, ReviewStatus::Pending);
    assert_eq!(review.created_at, "2024-05-01T10:00:00");
}

#[test]
fn empty_echo_still_yields_a_review() {
    let review = submitted().into_created(serde_json::Value::Null);
    assert_eq!(review.id, 0);
    assert_eq!(review.rating, 4);
    assert_eq!(review.status, ReviewStatus::Pending);
    assert!(review.created_at.is_empty());
}

#[test]
fn full_echo_is_taken_as_is() {
    let stored = review(9, "Ministry of Health", 5, ReviewStatus::Approved);
    let echo = serde_json::to_value(&stored).unwrap();
    assert_eq!(submitted().into_created(echo), stored);
}
