//! Citizen accounts: login (`/citizen/token`) and registration
//! (`/citizen/register`).

#[cfg(test)]
#[path = "citizen_test.rs"]
mod citizen_test;

use serde::{Deserialize, Serialize};

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// OAuth2 password-flow token response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Form-encoded credentials for `POST /citizen/token`.
///
/// The backend follows the OAuth2 password flow, so the email travels as
/// `username`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { username: email.trim().to_owned(), password: password.to_owned() }
    }

    /// `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

/// Body of `POST /citizen/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RegisterRequest {
    /// Build a request from raw form fields; blank optional fields are dropped.
    #[must_use]
    pub fn from_form(email: &str, password: &str, full_name: &str, phone: &str, address: &str) -> Self {
        let optional = |raw: &str| Some(raw.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            email: email.trim().to_owned(),
            password: password.to_owned(),
            full_name: full_name.trim().to_owned(),
            phone: optional(phone),
            address: optional(address),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Moderator,
    #[default]
    Citizen,
    Anonymous,
}

/// Signed-in user as held by the portal's auth store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    /// Profile for a citizen known only by the email they logged in with.
    #[must_use]
    pub fn citizen(email: &str) -> Self {
        let email = email.trim().to_owned();
        let full_name = email.split('@').next().unwrap_or_default().to_owned();
        Self { email, full_name, role: UserRole::Citizen }
    }
}
