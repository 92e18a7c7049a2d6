//! Persistence layer for the PsiClin site backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Query timing metrics
//!
//! SQL migrations live in `src/migrations` and are embedded by the binary.

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
