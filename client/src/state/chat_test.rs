use super::*;

fn answer() -> AiAnswer {
    AiAnswer {
        answer_text: "Article 1 applies.".to_owned(),
        confidence: 0.85,
        sources: Vec::new(),
        query_id: Some("q-9".to_owned()),
    }
}

#[test]
fn whitespace_message_is_not_sent() {
    let mut state = ChatState::default();
    assert!(state.submit("  ", 0).is_none());
    assert!(state.messages.is_empty());
}

#[test]
fn transcript_is_chronological() {
    let mut state = ChatState::default();
    let request = state.submit("Tenant rights?", 1).unwrap();
    assert_eq!(request.query.as_deref(), Some("Tenant rights?"));
    assert_eq!(request.max_sources, Some(5));
    assert!(state.submit("again", 2).is_none());

    state.resolve(Ok(answer()), 3);
    let roles: Vec<Role> = state.messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant]);
    assert_eq!(state.messages[1].confidence, Some(0.85));
    assert!(!state.pending);
}

#[test]
fn failure_appends_apology_and_sets_banner() {
    let mut state = ChatState::default();
    state.submit("hello", 1);
    state.resolve(Err(ApiError::from_status(500, r#"{"detail":"model offline"}"#)), 2);
    assert_eq!(state.messages.last().map(|m| m.content.as_str()), Some(fixtures::CHAT_APOLOGY));
    assert_eq!(state.error.as_deref(), Some("Failed to get an answer: model offline"));
    assert!(!state.messages[1].accepts_feedback());
}

#[test]
fn feedback_is_sent_once_per_answer() {
    let mut state = ChatState::default();
    state.submit("hello", 1);
    state.resolve(Ok(answer()), 2);
    let id = state.messages[1].id.clone();

    let request = state.give_feedback(&id, FeedbackType::Useful).unwrap();
    assert_eq!(request.query_id, "q-9");
    assert!(state.give_feedback(&id, FeedbackType::Incorrect).is_none());
    assert_eq!(state.messages[1].feedback, Some(FeedbackType::Useful));

    let user_id = state.messages[0].id.clone();
    assert!(state.give_feedback(&user_id, FeedbackType::Useful).is_none());
}

#[test]
fn clear_drops_answer_still_in_flight() {
    let mut state = ChatState::default();
    state.submit("hello", 1);
    state.clear();
    assert!(!state.pending);

    state.resolve(Err(ApiError::Network("late".to_owned())), 2);
    assert!(state.messages.is_empty());
    assert!(state.error.is_none());
    assert!(state.submit("again", 3).is_some());
}
