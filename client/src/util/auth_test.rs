use super::*;
use records::User;

#[test]
fn stays_on_auth_page_without_session() {
    assert!(!should_leave_auth_page(&AuthState::default()));
}

#[test]
fn stays_while_submitting() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned(), User::citizen("a@b.ma"));
    state.loading = true;
    assert!(!should_leave_auth_page(&state));
}

#[test]
fn leaves_once_signed_in() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned(), User::citizen("a@b.ma"));
    assert!(should_leave_auth_page(&state));
}
