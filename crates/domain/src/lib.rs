//! Domain layer for the PsiClin site backend.
//!
//! This crate contains:
//! - Domain models (BlogPost, Video, Contact, User)
//! - Request schemas with boundary validation
//! - The contact status workflow and the public display cards

pub mod models;
