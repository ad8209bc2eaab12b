//! Endpoint paths relative to the API root (`/api/v1`).

pub const INSTITUTIONS: &str = "/gov/institutions";
pub const LAWS: &str = "/legal/laws";
pub const LAW_CATEGORIES: &str = "/legal/categories";
pub const AI_QUERY: &str = "/ai/query";
pub const AI_FEEDBACK: &str = "/ai/feedback";
pub const REVIEWS: &str = "/reviews";
pub const BUDGET_ITEMS: &str = "/budget/items";
pub const CITIZEN_TOKEN: &str = "/citizen/token";
pub const CITIZEN_REGISTER: &str = "/citizen/register";
pub const HEALTH: &str = "/health";
