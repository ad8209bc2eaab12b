//! Budget transparency page state.
//!
//! The year and ministry go to the server; sorting and the ministry filter
//! are also applied locally so fallback data reacts to the controls.

#[cfg(test)]
#[path = "budget_test.rs"]
mod budget_test;

use records::budget::{filter_and_sort, ministries};
use records::{BudgetItem, BudgetQuery, BudgetSort, BudgetSummary, ToQuery, endpoints};

use super::fixtures;
use super::loader::{Fetch, ListState, RequestTicket};
use crate::net::error::ApiError;

/// Number of fiscal years offered by the year selector.
pub const YEAR_CHOICES: i32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetState {
    pub query: BudgetQuery,
    pub sort: BudgetSort,
    pub list: ListState<BudgetItem>,
}

impl BudgetState {
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self { query: BudgetQuery::for_year(year), sort: BudgetSort::default(), list: ListState::default() }
    }

    #[must_use]
    pub fn request_path(&self) -> String {
        self.query.to_query().append_to(endpoints::BUDGET_ITEMS)
    }

    pub fn refresh(&mut self) -> Fetch {
        Fetch { ticket: self.list.begin(), path: self.request_path() }
    }

    pub fn set_year(&mut self, year: i32) -> Option<Fetch> {
        if self.query.year == year {
            return None;
        }
        self.query.year = year;
        Some(self.refresh())
    }

    pub fn set_ministry(&mut self, ministry: &str) -> Option<Fetch> {
        if self.query.ministry == ministry {
            return None;
        }
        ministry.clone_into(&mut self.query.ministry);
        Some(self.refresh())
    }

    /// Local re-ordering; never fetches.
    pub fn set_sort(&mut self, sort: BudgetSort) {
        self.sort = sort;
    }

    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<Vec<BudgetItem>, ApiError>) {
        self.list.resolve(ticket, outcome, "budget data", fixtures::budget_items);
    }

    /// Rows on screen: ministry-filtered and sorted.
    #[must_use]
    pub fn rows(&self) -> Vec<BudgetItem> {
        filter_and_sort(&self.list.items, &self.query.ministry, self.sort)
    }

    /// Totals for the rows on screen.
    #[must_use]
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_items(&self.rows())
    }

    #[must_use]
    pub fn ministry_options(&self) -> Vec<String> {
        ministries(&self.list.items)
    }
}

/// Years offered by the selector, newest first, ending at `current`.
#[must_use]
pub fn year_options(current: i32) -> Vec<i32> {
    (0..YEAR_CHOICES).map(|offset| current - offset).collect()
}
