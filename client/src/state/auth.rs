//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided at the app root. Login and register
//! write it; the shell and every page read it. The persisted copy in
//! localStorage is only touched through [`persist_session`] and
//! [`forget_session`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use records::citizen::MIN_PASSWORD_LEN;
use records::{LoginForm, RegisterRequest, User, UserRole};

use crate::net::error::ApiError;
use crate::util::storage;

/// Pause between the registration success notice and the automatic login.
pub const AUTO_LOGIN_DELAY: Duration = Duration::from_secs(2);

/// Authentication state: bearer token, profile and submit status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Session restored from localStorage (empty outside the browser).
    #[must_use]
    pub fn restore() -> Self {
        let token = storage::load_token();
        let user = token.as_ref().and_then(|_| storage::load_json::<User>(storage::USER_KEY));
        Self { token, user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Name shown in the navigation bar.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| if u.full_name.is_empty() { u.email.as_str() } else { u.full_name.as_str() })
    }
}

/// Store the token and profile so a reload keeps the session.
pub fn persist_session(token: &str, user: &User) {
    storage::save_token(token);
    storage::save_json(storage::USER_KEY, user);
}

pub fn forget_session() {
    storage::clear_token();
}

/// Required-field check before posting credentials.
///
/// # Errors
///
/// Returns the message to show when a field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginForm, &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Veuillez saisir votre email et votre mot de passe");
    }
    Ok(LoginForm::new(email, password))
}

/// Message shown for a failed login.
#[must_use]
pub fn login_error_message(error: &ApiError) -> &'static str {
    match error.status() {
        Some(401) => "Email ou mot de passe incorrect",
        Some(422) => "Veuillez vérifier le format de votre email et mot de passe",
        _ => "Échec de la connexion. Veuillez réessayer.",
    }
}

/// Message shown for a failed registration.
#[must_use]
pub fn register_error_message(error: &ApiError) -> &'static str {
    match error.status() {
        Some(400) => "Email already exists or invalid data",
        Some(422) => "Please check your input data",
        _ => "Registration failed. Please try again.",
    }
}

/// Raw registration form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

impl RegisterFields {
    /// Local checks, in the order the form reports them.
    ///
    /// # Errors
    ///
    /// Returns the message for the first failing rule.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.email.trim().is_empty() || self.full_name.trim().is_empty() {
            return Err("Email and full name are required");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters long");
        }
        Ok(RegisterRequest::from_form(&self.email, &self.password, &self.full_name, &self.phone, &self.address))
    }

    /// Profile for the account just created.
    #[must_use]
    pub fn user(&self) -> User {
        User { email: self.email.trim().to_owned(), full_name: self.full_name.trim().to_owned(), role: UserRole::Citizen }
    }
}
