//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod json;
pub mod query;
pub mod seed_token;

pub use json::ValidatedJson;
pub use query::ValidatedQuery;
pub use seed_token::{SeedToken, SEED_TOKEN_HEADER};
