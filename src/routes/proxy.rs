//! `/api/v1/*` pass-through to the backend.
//!
//! Method, query string, body and the `authorization`, `content-type` and
//! `accept` headers go upstream unchanged; the upstream status, content type
//! and body come back unchanged. Only transport failures are answered here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Request headers copied to the upstream call.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// API prefix shared by the host and the backend.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Backend URL for an API path and optional raw query string.
#[must_use]
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    let base = upstream.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}{API_PREFIX}/{path}?{query}"),
        None => format!("{base}{API_PREFIX}/{path}"),
    }
}

/// Forward one API request and relay the response.
///
/// # Errors
///
/// Returns [`ProxyError`] when the backend cannot be reached or the response
/// body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.upstream, &path, query.as_deref());
    tracing::debug!(%method, %url, "proxying api request");

    let mut request = state.http.request(method, &url).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await.inspect_err(|e| {
        tracing::warn!(error = %e, %url, "upstream request failed");
    })?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
