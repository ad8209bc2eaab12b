use super::*;

fn answer(text: &str, confidence: f64) -> AiAnswer {
    AiAnswer { answer_text: text.to_owned(), confidence, sources: Vec::new(), query_id: Some(format!("q-{text}")) }
}

#[test]
fn whitespace_question_is_not_sent() {
    let mut state = QaState::default();
    assert!(state.submit("   \n").is_none());
    assert!(!state.is_busy());
}

#[test]
fn submit_builds_qa_request_and_blocks_second_question() {
    let mut state = QaState::default();
    let request = state.submit(" What is law 12-2024? ").unwrap();
    assert_eq!(request.query_text.as_deref(), Some("What is law 12-2024?"));
    assert_eq!(request.max_tokens, Some(500));
    assert!(state.submit("another").is_none());
}

#[test]
fn answers_are_listed_newest_first() {
    let mut state = QaState::default();
    state.submit("first");
    state.resolve(Ok(answer("one", 0.9)), 1);
    state.submit("second");
    state.resolve(Ok(answer("two", 0.7)), 2);

    let questions: Vec<&str> = state.history.iter().map(|e| e.question.as_str()).collect();
    assert_eq!(questions, vec!["second", "first"]);
    assert_eq!(state.history[0].id, "q-two");
    assert!(!state.is_busy());
}

#[test]
fn failure_records_fallback_answer() {
    let mut state = QaState::default();
    state.submit("offline?");
    state.resolve(Err(ApiError::Network("Network Error".to_owned())), 5);
    let entry = &state.history[0];
    assert!(entry.fallback);
    assert!((entry.answer.confidence - 0.3).abs() < f64::EPSILON);
    assert_eq!(entry.answer.sources.len(), 1);
    assert!(!entry.id.is_empty());
}

#[test]
fn resolve_without_pending_question_is_ignored() {
    let mut state = QaState::default();
    state.resolve(Ok(answer("stray", 1.0)), 0);
    assert!(state.history.is_empty());
}
