//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod blog_post;
pub mod contact;
pub mod user;
pub mod video;

pub use blog_post::BlogPostEntity;
pub use contact::{ContactEntity, ContactStatusDb};
pub use user::UserEntity;
pub use video::VideoEntity;
