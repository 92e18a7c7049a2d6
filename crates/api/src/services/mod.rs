//! Application services used by the route handlers.

pub mod accounts;
pub mod uploads;

pub use accounts::{AccountError, SeedOutcome};
pub use uploads::{AvatarStore, UploadError};
