//! Domain models for the PsiClin site.

pub mod blog_post;
pub mod contact;
pub mod dashboard;
mod fields;
pub mod home;
pub mod user;
pub mod video;

pub use blog_post::{BlogPost, BlogPostChanges, NewBlogPost, PostCard};
pub use contact::{Contact, ContactStatus, NewContact, StatusTransitionError};
pub use dashboard::DashboardStats;
pub use home::HomeData;
pub use user::{AuthResponse, ProfileUpdate, Registration, User, UserSummary};
pub use video::{NewVideo, Video, VideoCard};
