//! Government institution records (`/gov/institutions`).

#[cfg(test)]
#[path = "gov_test.rs"]
mod gov_test;

use serde::{Deserialize, Serialize};

use crate::query::{QueryString, ToQuery};

/// A government body: ministry, agency, department or office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Institution type as reported by the backend (e.g. `"Ministry"`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Institution {
    /// Case-insensitive match on name, code or description.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.code.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Filters for the institutions listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstitutionQuery {
    pub search: String,
    /// Institution type, or [`crate::ALL`].
    pub kind: String,
}

impl Default for InstitutionQuery {
    fn default() -> Self {
        Self { search: String::new(), kind: crate::ALL.to_owned() }
    }
}

impl ToQuery for InstitutionQuery {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push("search", &self.search).push_filter("type", &self.kind);
        query
    }
}

/// Distinct institution types in first-seen order.
#[must_use]
pub fn institution_types(items: &[Institution]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|k| k == &item.kind) {
            out.push(item.kind.clone());
        }
    }
    out
}

/// Number of institutions per type, in first-seen order.
#[must_use]
pub fn count_by_type(items: &[Institution]) -> Vec<(String, usize)> {
    institution_types(items)
        .into_iter()
        .map(|kind| {
            let count = items.iter().filter(|i| i.kind == kind).count();
            (kind, count)
        })
        .collect()
}
