//! Public home page data.

use serde::Serialize;

use super::blog_post::{BlogPost, PostCard};
use super::video::{Video, VideoCard};

/// Number of recent posts shown on the home page.
pub const HOME_LATEST_POSTS: i64 = 2;

/// Number of featured videos shown on the home page.
pub const HOME_FEATURED_VIDEOS: i64 = 3;

/// Everything the home page renders from the database.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub featured_posts: Vec<PostCard>,
    pub featured_videos: Vec<VideoCard>,
}

impl HomeData {
    /// Builds the display cards from freshly loaded rows.
    pub fn from_rows(posts: Vec<BlogPost>, videos: Vec<Video>) -> Self {
        Self {
            featured_posts: posts.into_iter().map(PostCard::from).collect(),
            featured_videos: videos.into_iter().map(VideoCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blog_post::PLACEHOLDER_COVER_URL;
    use chrono::Utc;

    #[test]
    fn test_home_data_from_rows() {
        let post = BlogPost {
            id: 1,
            title: "Luto".to_string(),
            slug: "luto".to_string(),
            summary: None,
            cover_image_url: Some(String::new()),
            data_ai_hint: None,
            category: None,
            content: None,
            created_at: Utc::now(),
        };
        let video = Video {
            id: 9,
            title: "Entrevista".to_string(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10".to_string(),
            description: Some("Conversa".to_string()),
            featured: true,
            created_at: Utc::now(),
        };

        let home = HomeData::from_rows(vec![post], vec![video]);
        assert_eq!(home.featured_posts[0].cover_image_url, PLACEHOLDER_COVER_URL);
        assert_eq!(home.featured_videos[0].youtube_id, "dQw4w9WgXcQ");

        let json = serde_json::to_value(&home).unwrap();
        assert!(json["featuredPosts"].is_array());
        assert_eq!(json["featuredVideos"][0]["id"], "9");
    }

    #[test]
    fn test_empty_home_data() {
        let json = serde_json::to_value(HomeData::default()).unwrap();
        assert_eq!(json["featuredPosts"].as_array().unwrap().len(), 0);
        assert_eq!(json["featuredVideos"].as_array().unwrap().len(), 0);
    }
}
