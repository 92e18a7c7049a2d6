//! Admin dashboard counters.

use serde::{Deserialize, Serialize};

/// Window used for `posts_last_month`.
pub const RECENT_POSTS_DAYS: i64 = 30;

/// Totals shown on the admin dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub posts: i64,
    /// Posts created in the last [`RECENT_POSTS_DAYS`] days.
    pub posts_last_month: i64,
    pub contacts: i64,
    /// Contacts whose status is not yet `respondido`.
    pub unanswered_contacts: i64,
    pub featured_videos: i64,
}
