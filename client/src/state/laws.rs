//! Legal repository state: laws list with an articles detail panel.

#[cfg(test)]
#[path = "laws_test.rs"]
mod laws_test;

use records::{Law, LawQuery, ToQuery, endpoints};

use super::fixtures;
use super::loader::{Fetch, ListState, RequestTicket};
use crate::net::error::ApiError;

/// A text filter of [`LawQuery`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LawFilter {
    Text,
    From,
    To,
    Category,
    Ministry,
}

impl LawFilter {
    fn slot(self, query: &mut LawQuery) -> &mut String {
        match self {
            Self::Text => &mut query.q,
            Self::From => &mut query.from,
            Self::To => &mut query.to,
            Self::Category => &mut query.category,
            Self::Ministry => &mut query.ministry,
        }
    }

    /// Set the filter; `true` when the value changed.
    pub fn apply(self, query: &mut LawQuery, value: &str) -> bool {
        let slot = self.slot(query);
        if slot.as_str() == value {
            return false;
        }
        value.clone_into(slot);
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LawsState {
    pub query: LawQuery,
    pub list: ListState<Law>,
    pub selected: Option<i64>,
}

impl LawsState {
    #[must_use]
    pub fn request_path(&self) -> String {
        self.query.to_query().append_to(endpoints::LAWS)
    }

    pub fn refresh(&mut self) -> Fetch {
        Fetch { ticket: self.list.begin(), path: self.request_path() }
    }

    pub fn set_filter(&mut self, filter: LawFilter, value: &str) -> Option<Fetch> {
        filter.apply(&mut self.query, value).then(|| self.refresh())
    }

    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<Vec<Law>, ApiError>) {
        if self.list.resolve(ticket, outcome, "laws", fixtures::laws) && self.selected_law().is_none() {
            self.selected = None;
        }
    }

    /// Toggle the detail panel for `law_id`.
    pub fn toggle(&mut self, law_id: i64) {
        self.selected = if self.selected == Some(law_id) { None } else { Some(law_id) };
    }

    #[must_use]
    pub fn selected_law(&self) -> Option<&Law> {
        let id = self.selected?;
        self.list.items.iter().find(|l| l.law_id == id)
    }
}
