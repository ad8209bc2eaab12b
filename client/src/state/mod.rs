//! Client-side state.
//!
//! DESIGN
//! ======
//! `auth` is the only app-wide store; every other module is owned by one
//! page and held in a page-local `RwSignal`. The types are plain structs with
//! synchronous transitions so page behavior is testable without a browser.

pub mod auth;
pub mod budget;
pub mod chat;
pub mod fixtures;
pub mod institutions;
pub mod laws;
pub mod legal_search;
pub mod loader;
pub mod qa;
pub mod reviews;
