//! Fetch-with-fallback list state shared by every list page.
//!
//! DESIGN
//! ======
//! Each load starts with [`ListState::begin`], which bumps a generation
//! counter and hands back a [`RequestTicket`]. [`ListState::resolve`] applies
//! an outcome only when its ticket is still the latest one, so a slow
//! response for an old filter can never overwrite the result of a newer
//! request. Errors swap in fixture data and set the banner text; an empty
//! success is kept as-is so pages can show their empty state.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use leptos::logging::{log, warn};

use crate::net::error::ApiError;

/// Identifies one load; only the newest ticket may resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Where the displayed items came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Nothing has resolved yet.
    #[default]
    Pending,
    Live,
    Fallback,
}

/// A load to perform: the ticket to resolve with and the request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetch {
    pub ticket: RequestTicket,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    /// Server-reported total for paginated lists; `items.len()` otherwise.
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub source: DataSource,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, loading: false, error: None, source: DataSource::Pending, generation: 0 }
    }
}

impl<T> ListState<T> {
    /// Start a new load, superseding any in flight.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.loading = true;
        RequestTicket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a list outcome. Returns `false` when the ticket was stale.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<T>, ApiError>,
        what: &str,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> bool {
        let outcome = outcome.map(|items| {
            let total = items.len() as u64;
            (items, total)
        });
        self.resolve_page(ticket, outcome, what, fallback)
    }

    /// Apply a paginated outcome. Returns `false` when the ticket was stale.
    pub fn resolve_page(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<(Vec<T>, u64), ApiError>,
        what: &str,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> bool {
        if !self.is_current(ticket) {
            log!("discarding stale {what} response");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok((items, total)) => {
                self.items = items;
                self.total = total;
                self.error = None;
                self.source = DataSource::Live;
            }
            Err(error) => {
                warn!("{what} request failed: {error}");
                self.error = Some(load_error_message(what, &error));
                self.items = fallback();
                self.total = self.items.len() as u64;
                self.source = DataSource::Fallback;
            }
        }
        true
    }

    /// Loaded successfully with nothing to show.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.source == DataSource::Live && self.items.is_empty()
    }

    /// Insert a freshly created record at the top.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.total += 1;
    }

    /// Drop all rows and abandon any load in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.total = 0;
        self.loading = false;
        self.error = None;
        self.source = DataSource::Pending;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Banner text for a failed load.
#[must_use]
pub fn load_error_message(what: &str, error: &ApiError) -> String {
    format!("Failed to load {what}: {}", error.detail())
}
