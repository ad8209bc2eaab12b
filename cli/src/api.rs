//! Thin reqwest wrapper over the portal API.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::CliError;

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.trim().is_empty()),
            http: reqwest::Client::new(),
        }
    }

    /// Absolute URL for an endpoint path (with or without its query string).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value, CliError> {
        finish(self.request(reqwest::Method::GET, path).send().await?).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, CliError> {
        finish(self.request(reqwest::Method::POST, path).json(body).send().await?).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, path: &str, body: String) -> Result<Value, CliError> {
        let request = self
            .request(reqwest::Method::POST, path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        finish(request.send().await?).await
    }
}

async fn finish(response: reqwest::Response) -> Result<Value, CliError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), detail: records::error_detail(status.as_u16(), &body) });
    }
    parse_body(&body)
}

/// Decode a success body; an empty body is `null`.
pub fn parse_body(body: &str) -> Result<Value, CliError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}
