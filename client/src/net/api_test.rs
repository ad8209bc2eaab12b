use super::*;

#[test]
fn endpoint_prefixes_api_root() {
    assert_eq!(endpoint(endpoints::INSTITUTIONS), "/api/v1/gov/institutions");
    assert_eq!(endpoint("/reviews?sort=newest"), "/api/v1/reviews?sort=newest");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn parse_body_treats_blank_as_null() {
    assert_eq!(parse_body("  "), Ok(Value::Null));
    assert_eq!(parse_body("[1,2]"), Ok(serde_json::json!([1, 2])));
}

#[test]
fn parse_body_rejects_non_json() {
    assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
}
