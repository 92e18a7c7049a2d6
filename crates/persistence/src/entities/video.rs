//! Video entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the videos table.
#[derive(Debug, Clone, FromRow)]
pub struct VideoEntity {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<VideoEntity> for domain::models::Video {
    fn from(entity: VideoEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            url: entity.url,
            description: entity.description,
            featured: entity.featured,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::Video;

    #[test]
    fn test_video_entity_to_domain() {
        let entity = VideoEntity {
            id: 2,
            title: "Ansiedade".to_string(),
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            description: None,
            featured: true,
            created_at: Utc::now(),
        };

        let video: Video = entity.into();
        assert_eq!(video.id, 2);
        assert!(video.featured);
        assert!(video.description.is_none());
    }
}
