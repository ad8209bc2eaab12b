//! Citizen reviews page state: filters, list, stats and submission form.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use leptos::logging::warn;
use records::reviews::reviewed_institutions;
use records::{NewReview, Review, ReviewQuery, ReviewSort, ReviewStats, ToQuery, endpoints};

use super::fixtures;
use super::loader::{Fetch, ListState, RequestTicket};
use crate::net::error::ApiError;

/// Institutions offered by the submission form.
pub const FORM_INSTITUTIONS: [&str; 5] = [
    "Ministry of Health",
    "Ministry of Education",
    "Ministry of Interior",
    "Ministry of Finance",
    "Ministry of Agriculture",
];

pub const SUBMIT_FAILED: &str = "Failed to submit review. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewsState {
    pub query: ReviewQuery,
    pub list: ListState<Review>,
    pub form: NewReview,
    pub show_form: bool,
    pub submitting: bool,
    pub form_error: Option<String>,
}

impl ReviewsState {
    #[must_use]
    pub fn request_path(&self) -> String {
        self.query.to_query().append_to(endpoints::REVIEWS)
    }

    pub fn refresh(&mut self) -> Fetch {
        Fetch { ticket: self.list.begin(), path: self.request_path() }
    }

    pub fn set_institution(&mut self, institution: &str) -> Option<Fetch> {
        if self.query.institution == institution {
            return None;
        }
        institution.clone_into(&mut self.query.institution);
        Some(self.refresh())
    }

    pub fn set_category(&mut self, category: &str) -> Option<Fetch> {
        if self.query.category == category {
            return None;
        }
        category.clone_into(&mut self.query.category);
        Some(self.refresh())
    }

    pub fn set_sort(&mut self, sort: ReviewSort) -> Option<Fetch> {
        if self.query.sort == sort {
            return None;
        }
        self.query.sort = sort;
        Some(self.refresh())
    }

    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<Vec<Review>, ApiError>) {
        self.list.resolve(ticket, outcome, "reviews", fixtures::reviews);
    }

    #[must_use]
    pub fn stats(&self) -> ReviewStats {
        ReviewStats::from_reviews(&self.list.items)
    }

    /// Institution filter options: loaded names, then the form's list.
    #[must_use]
    pub fn institution_options(&self) -> Vec<String> {
        let mut options = reviewed_institutions(&self.list.items);
        for name in FORM_INSTITUTIONS {
            if !options.iter().any(|o| o == name) {
                options.push(name.to_owned());
            }
        }
        options
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
        self.form_error = None;
    }

    /// Validate the form and mark it submitting; returns the payload.
    pub fn begin_submit(&mut self) -> Option<NewReview> {
        if self.submitting {
            return None;
        }
        let mut payload = self.form.clone();
        payload.official_name = payload.official_name.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());
        if let Err(error) = payload.validate() {
            self.form_error = Some(error.to_string());
            return None;
        }
        self.submitting = true;
        self.form_error = None;
        Some(payload)
    }

    /// Prepend the created review and reset the form, or report failure.
    pub fn finish_submit(&mut self, outcome: Result<Review, ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(review) => {
                self.list.prepend(review);
                self.form = NewReview::default();
                self.show_form = false;
            }
            Err(error) => {
                warn!("review submission failed: {error}");
                self.form_error = Some(SUBMIT_FAILED.to_owned());
            }
        }
    }
}
