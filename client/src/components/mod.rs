//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (navigation, banners, stat tiles and
//! AI answer details) and take their data as props; only the shell reads the
//! auth store from context.

pub mod answer;
pub mod error_banner;
pub mod shell;
pub mod stat_card;
