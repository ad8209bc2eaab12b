//! Paginated legal search with debounced filters.
//!
//! Every filter edit resets to page 1 and arms a debounce; only the newest
//! armed debounce may start a search, and only when some filter is set.

#[cfg(test)]
#[path = "legal_search_test.rs"]
mod legal_search_test;

use std::time::Duration;

use leptos::logging::warn;
use records::legal::{DEFAULT_PAGE_SIZE, total_pages};
use records::{LawQuery, LawSummary, ToQuery, endpoints};

use super::fixtures;
use super::laws::LawFilter;
use super::loader::{Fetch, ListState, RequestTicket};
use crate::net::error::ApiError;

/// Quiet period after the last edit before searching.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one armed debounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct LegalSearchState {
    pub query: LawQuery,
    pub list: ListState<LawSummary>,
    pub categories: Vec<String>,
    pub show_filters: bool,
    armed: u64,
}

impl Default for LegalSearchState {
    fn default() -> Self {
        Self {
            query: LawQuery { page: Some(1), page_size: Some(DEFAULT_PAGE_SIZE), ..LawQuery::default() },
            list: ListState::default(),
            categories: Vec::new(),
            show_filters: false,
            armed: 0,
        }
    }
}

impl LegalSearchState {
    #[must_use]
    pub fn page(&self) -> u32 {
        self.query.page.unwrap_or(1)
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.query.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn request_path(&self) -> String {
        self.query.to_query().append_to(endpoints::LAWS)
    }

    fn arm(&mut self) -> DebounceTicket {
        self.armed += 1;
        DebounceTicket(self.armed)
    }

    /// Edit a filter; returns the debounce to wait on when it changed.
    pub fn set_filter(&mut self, filter: LawFilter, value: &str) -> Option<DebounceTicket> {
        if !filter.apply(&mut self.query, value) {
            return None;
        }
        self.query.page = Some(1);
        Some(self.arm())
    }

    /// Move to `page`, clamped to the known page range.
    pub fn set_page(&mut self, page: u32) -> Option<DebounceTicket> {
        let last = u32::try_from(self.total_pages()).unwrap_or(u32::MAX);
        let page = page.clamp(1, last);
        if self.page() == page {
            return None;
        }
        self.query.page = Some(page);
        Some(self.arm())
    }

    /// Called when a debounce elapses; starts the search if it is still due.
    /// A blank query abandons any search still in flight.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<Fetch> {
        if ticket.0 != self.armed {
            return None;
        }
        if self.query.is_blank() {
            self.list.reset();
            return None;
        }
        Some(Fetch { ticket: self.list.begin(), path: self.request_path() })
    }

    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<(Vec<LawSummary>, u64), ApiError>) {
        self.list.resolve_page(ticket, outcome, "laws", fixtures::law_summaries);
    }

    /// Store the category list; failures leave it empty.
    pub fn set_categories(&mut self, outcome: Result<Vec<String>, ApiError>) {
        match outcome {
            Ok(categories) => self.categories = categories,
            Err(error) => {
                warn!("failed to fetch categories: {error}");
                self.categories.clear();
            }
        }
    }

    pub fn clear_filters(&mut self) -> Option<DebounceTicket> {
        if self.query.is_blank() {
            return None;
        }
        self.query = LawQuery { page: Some(1), page_size: self.query.page_size, ..LawQuery::default() };
        self.list.reset();
        Some(self.arm())
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(self.list.total, self.page_size())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page() > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page()) < self.total_pages()
    }
}
