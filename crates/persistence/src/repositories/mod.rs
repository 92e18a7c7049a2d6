//! Repository implementations for database operations.

pub mod blog_post;
pub mod contact;
pub mod dashboard;
pub mod user;
pub mod video;

pub use blog_post::BlogPostRepository;
pub use contact::ContactRepository;
pub use dashboard::DashboardRepository;
pub use user::UserRepository;
pub use video::VideoRepository;
