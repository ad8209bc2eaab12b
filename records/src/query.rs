//! Query-string construction for list endpoints.
//!
//! Parameters are emitted in insertion order, empty values are skipped and
//! everything is percent-encoded, so two equal filter sets always produce the
//! same string.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Select-box sentinel meaning "no filter".
pub const ALL: &str = "all";

/// Ordered list of query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless the trimmed value is empty.
    pub fn push(&mut self, key: &'static str, value: impl AsRef<str>) -> &mut Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.pairs.push((key, value.to_owned()));
        }
        self
    }

    /// Append an optional value.
    pub fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
        self
    }

    /// Append a select-box value, treating [`ALL`] as "not set".
    pub fn push_filter(&mut self, key: &'static str, value: &str) -> &mut Self {
        if value.trim() != ALL {
            self.push(key, value);
        }
        self
    }

    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encoded `a=1&b=2` form, without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Attach the query to `path`, omitting `?` when there are no parameters.
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

/// Filter structs that translate into endpoint query parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryString;
}
