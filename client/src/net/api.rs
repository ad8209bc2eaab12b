//! REST helpers for the portal API under `/api/v1`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the persisted
//! bearer token attached.
//! Server-side (SSR) and native builds: every call returns
//! [`ApiError::Unavailable`]; pages only issue requests from effects and
//! event handlers, which never run during server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`ApiError::Status`] carrying the backend's
//! `detail`. A 401 on any call other than login clears the stored token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::endpoints;
use records::{AiAnswer, AiFeedbackRequest, AiQueryRequest, LoginForm, NewReview, RegisterRequest, Review, TokenResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

#[cfg(feature = "hydrate")]
use crate::util::storage;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Same-origin API root; the host proxies it to the backend.
pub const API_BASE: &str = "/api/v1";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Empty bodies (204, fire-and-forget endpoints) decode as `null`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(feature = "hydrate")]
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn finish(sent: Result<Response, gloo_net::Error>, clear_on_401: bool) -> Result<Value, ApiError> {
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !(200..300).contains(&status) {
        if status == 401 && clear_on_401 {
            storage::clear_token();
        }
        return Err(ApiError::from_status(status, &body));
    }
    parse_body(&body)
}

/// `GET {API_BASE}{path}` returning raw JSON.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status or a
/// non-JSON body.
pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let sent = authorize(Request::get(&endpoint(path))).send().await;
        finish(sent, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST {API_BASE}{path}` with a JSON body.
///
/// # Errors
///
/// Same as [`get_json`]; serialization failures map to [`ApiError::Decode`].
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorize(Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        finish(request.send().await, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a list endpoint, accepting any envelope `records` understands.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for unexpected response shapes.
pub async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    Ok(records::decode_list(get_json(path).await?)?)
}

/// Fetch a paginated endpoint as `(items, total)`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for unexpected response shapes.
pub async fn fetch_page<T: DeserializeOwned>(path: &str) -> Result<(Vec<T>, u64), ApiError> {
    Ok(records::decode_page(get_json(path).await?)?)
}

/// Legal categories for the search filters.
///
/// # Errors
///
/// See [`fetch_list`].
pub async fn fetch_law_categories() -> Result<Vec<String>, ApiError> {
    fetch_list(endpoints::LAW_CATEGORIES).await
}

/// Ask the legal assistant one question.
///
/// # Errors
///
/// See [`post_json`].
pub async fn ask(request: &AiQueryRequest) -> Result<AiAnswer, ApiError> {
    let value = post_json(endpoints::AI_QUERY, request).await?;
    Ok(serde_json::from_value(value)?)
}

/// Record reader feedback on an answer.
///
/// # Errors
///
/// See [`post_json`].
pub async fn send_feedback(request: &AiFeedbackRequest) -> Result<(), ApiError> {
    post_json(endpoints::AI_FEEDBACK, request).await.map(|_| ())
}

/// Submit a review. Any 2xx counts as stored; the echo may be partial or
/// empty, see [`NewReview::into_created`].
///
/// # Errors
///
/// See [`post_json`].
pub async fn create_review(review: &NewReview) -> Result<Review, ApiError> {
    let echo = post_json(endpoints::REVIEWS, review).await?;
    Ok(review.clone().into_created(echo))
}

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 401/422 for rejected credentials.
pub async fn login(form: &LoginForm) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = Request::post(&endpoint(endpoints::CITIZEN_TOKEN))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.encode())
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = finish(request.send().await, false).await?;
        Ok(serde_json::from_value(value)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Create a citizen account.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 400/422 for rejected data.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = Request::post(&endpoint(endpoints::CITIZEN_REGISTER))
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        finish(request.send().await, false).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
