use super::*;
use serde_json::json;

#[test]
fn login_form_is_url_encoded() {
    let form = LoginForm::new("  amina@example.ma ", "p&ss word");
    assert_eq!(form.encode(), "username=amina%40example.ma&password=p%26ss%20word");
}

#[test]
fn token_response_tolerates_missing_type() {
    let token: TokenResponse = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    assert_eq!(token.access_token, "abc");
    assert!(token.token_type.is_none());
}

#[test]
fn register_request_skips_blank_optionals() {
    let request = RegisterRequest::from_form("a@b.ma", "secret1", " Amina ", "  ", "Rabat");
    assert_eq!(
        serde_json::to_value(request).unwrap(),
        json!({ "email": "a@b.ma", "password": "secret1", "full_name": "Amina", "address": "Rabat" })
    );
}

#[test]
fn citizen_profile_uses_email_local_part() {
    let user = User::citizen("amina@example.ma");
    assert_eq!(user.full_name, "amina");
    assert_eq!(user.role, UserRole::Citizen);
}
