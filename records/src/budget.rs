//! Budget transparency records (`/budget/items`) and their aggregates.
//!
//! The portal shows totals for whatever subset is currently on screen, so
//! [`BudgetSummary`] is always computed from the filtered, loaded items rather
//! than trusted from the server.

#[cfg(test)]
#[path = "budget_test.rs"]
mod budget_test;

use serde::{Deserialize, Serialize};

use crate::query::{QueryString, ToQuery};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Approved,
    #[default]
    Pending,
    Executed,
}

impl BudgetStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Executed => "executed",
        }
    }
}

/// One ministry program allocation for a fiscal year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: i64,
    pub ministry: String,
    pub program: String,
    /// Amount in dirhams (MAD).
    pub amount: f64,
    pub year: i32,
    pub category: String,
    #[serde(default)]
    pub status: BudgetStatus,
}

/// Filters for `/budget/items`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetQuery {
    pub year: i32,
    /// Ministry name, or [`crate::ALL`].
    pub ministry: String,
}

impl BudgetQuery {
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self { year, ministry: crate::ALL.to_owned() }
    }
}

impl ToQuery for BudgetQuery {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push("year", self.year.to_string()).push_filter("ministry", &self.ministry);
        query
    }
}

/// Client-side ordering of budget rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BudgetSort {
    #[default]
    AmountDesc,
    AmountAsc,
    MinistryAsc,
}

impl BudgetSort {
    pub const ALL: [Self; 3] = [Self::AmountDesc, Self::AmountAsc, Self::MinistryAsc];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AmountDesc => "amount_desc",
            Self::AmountAsc => "amount_asc",
            Self::MinistryAsc => "ministry_asc",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AmountDesc => "Amount (high to low)",
            Self::AmountAsc => "Amount (low to high)",
            Self::MinistryAsc => "Ministry (A-Z)",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

/// Keep rows for `ministry` (or all rows for [`crate::ALL`]) and sort them.
#[must_use]
pub fn filter_and_sort(items: &[BudgetItem], ministry: &str, sort: BudgetSort) -> Vec<BudgetItem> {
    let mut rows: Vec<BudgetItem> = items
        .iter()
        .filter(|item| ministry == crate::ALL || item.ministry == ministry)
        .cloned()
        .collect();
    match sort {
        BudgetSort::AmountDesc => rows.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        BudgetSort::AmountAsc => rows.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        BudgetSort::MinistryAsc => rows.sort_by(|a, b| a.ministry.cmp(&b.ministry)),
    }
    rows
}

/// Distinct ministries in first-seen order.
#[must_use]
pub fn ministries(items: &[BudgetItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item.ministry) {
            out.push(item.ministry.clone());
        }
    }
    out
}

/// A category's slice of the displayed total.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Fraction of the total in `0.0..=1.0`.
    pub share: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetSummary {
    pub total: f64,
    pub executed: f64,
    pub pending: f64,
    pub ministries: usize,
    /// Categories sorted by amount, largest first.
    pub categories: Vec<CategoryShare>,
}

impl BudgetSummary {
    #[must_use]
    pub fn from_items(items: &[BudgetItem]) -> Self {
        let total: f64 = items.iter().map(|i| i.amount).sum();
        let executed: f64 = items
            .iter()
            .filter(|i| i.status == BudgetStatus::Executed)
            .map(|i| i.amount)
            .sum();

        let mut categories: Vec<CategoryShare> = Vec::new();
        for item in items {
            match categories.iter_mut().find(|c| c.category == item.category) {
                Some(entry) => entry.amount += item.amount,
                None => categories.push(CategoryShare { category: item.category.clone(), amount: item.amount, share: 0.0 }),
            }
        }
        for entry in &mut categories {
            entry.share = if total > 0.0 { entry.amount / total } else { 0.0 };
        }
        categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        Self { total, executed, pending: total - executed, ministries: ministries(items).len(), categories }
    }

    /// Executed fraction of the total, `0.0` when nothing is budgeted.
    #[must_use]
    pub fn execution_rate(&self) -> f64 {
        if self.total > 0.0 { self.executed / self.total } else { 0.0 }
    }
}

/// Format an amount as `MAD 1,234,567`, rounded to whole dirhams.
#[must_use]
pub fn format_mad(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 { format!("-MAD {grouped}") } else { format!("MAD {grouped}") }
}
