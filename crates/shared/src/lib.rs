//! Shared utilities for the PsiClin backend.
//!
//! This crate provides pure helpers used across the other crates:
//! - YouTube reference normalization and canonical URLs
//! - Slug and upload file-name helpers
//! - Password hashing with Argon2id
//! - Field validation helpers

pub mod password;
pub mod slug;
pub mod validation;
pub mod youtube;
