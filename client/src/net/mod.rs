//! Networking for the portal API.
//!
//! `api` issues the HTTP calls and `error` types their failures.

pub mod api;
pub mod error;
