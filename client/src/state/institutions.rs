//! Institutions page state: filters, list and the selected detail row.

#[cfg(test)]
#[path = "institutions_test.rs"]
mod institutions_test;

use records::gov::{count_by_type, institution_types};
use records::{Institution, InstitutionQuery, ToQuery, endpoints};

use super::fixtures;
use super::loader::{Fetch, ListState, RequestTicket};
use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstitutionsState {
    pub query: InstitutionQuery,
    pub list: ListState<Institution>,
    pub selected: Option<i64>,
}

impl InstitutionsState {
    #[must_use]
    pub fn request_path(&self) -> String {
        self.query.to_query().append_to(endpoints::INSTITUTIONS)
    }

    pub fn refresh(&mut self) -> Fetch {
        Fetch { ticket: self.list.begin(), path: self.request_path() }
    }

    /// Update the search text; returns the load to run when it changed.
    pub fn set_search(&mut self, search: &str) -> Option<Fetch> {
        if self.query.search == search {
            return None;
        }
        search.clone_into(&mut self.query.search);
        Some(self.refresh())
    }

    /// Update the type filter; returns the load to run when it changed.
    pub fn set_kind(&mut self, kind: &str) -> Option<Fetch> {
        if self.query.kind == kind {
            return None;
        }
        kind.clone_into(&mut self.query.kind);
        Some(self.refresh())
    }

    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<Vec<Institution>, ApiError>) {
        if self.list.resolve(ticket, outcome, "institutions", fixtures::institutions) {
            if self.selected_institution().is_none() {
                self.selected = None;
            }
        }
    }

    /// Loaded rows matching the search text on name, code or description.
    #[must_use]
    pub fn visible(&self) -> Vec<Institution> {
        self.list.items.iter().filter(|i| i.matches(&self.query.search)).cloned().collect()
    }

    #[must_use]
    pub fn type_options(&self) -> Vec<String> {
        institution_types(&self.list.items)
    }

    #[must_use]
    pub fn type_counts(&self) -> Vec<(String, usize)> {
        count_by_type(&self.list.items)
    }

    pub fn select(&mut self, id: Option<i64>) {
        self.selected = id;
    }

    #[must_use]
    pub fn selected_institution(&self) -> Option<&Institution> {
        let id = self.selected?;
        self.list.items.iter().find(|i| i.id == id)
    }

    /// Name of `institution`'s parent body when it is loaded.
    #[must_use]
    pub fn parent_name(&self, institution: &Institution) -> Option<String> {
        let parent = institution.parent_id?;
        self.list.items.iter().find(|i| i.id == parent).map(|i| i.name.clone())
    }
}
