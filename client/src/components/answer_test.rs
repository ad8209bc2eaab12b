use super::*;

#[test]
fn confidence_class_follows_level() {
    assert_eq!(confidence_class(0.92), "confidence-badge confidence-badge--high");
    assert_eq!(confidence_class(0.6), "confidence-badge confidence-badge--medium");
    assert_eq!(confidence_class(0.1), "confidence-badge confidence-badge--low");
}

#[test]
fn confidence_text_includes_percentage() {
    assert_eq!(confidence_text(0.856), "High confidence (86%)");
    assert_eq!(confidence_text(0.3), "Low confidence (30%)");
}

#[test]
fn disclaimer_points_to_official_sources() {
    assert!(LEGAL_DISCLAIMER.contains("Bulletin Officiel"));
    assert!(LEGAL_DISCLAIMER.contains("licensed lawyer"));
}
