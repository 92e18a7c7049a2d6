//! Blog post entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the blog_posts table.
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostEntity {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
    pub data_ai_hint: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BlogPostEntity> for domain::models::BlogPost {
    fn from(entity: BlogPostEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            summary: entity.summary,
            cover_image_url: entity.cover_image_url,
            data_ai_hint: entity.data_ai_hint,
            category: entity.category,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::BlogPost;

    #[test]
    fn test_blog_post_entity_to_domain() {
        let now = Utc::now();
        let entity = BlogPostEntity {
            id: 5,
            title: "Terapia de casal".to_string(),
            slug: "terapia-de-casal".to_string(),
            summary: Some("Quando procurar".to_string()),
            cover_image_url: None,
            data_ai_hint: Some("couple talking".to_string()),
            category: Some("Relacionamentos".to_string()),
            content: Some("<p>Texto</p>".to_string()),
            created_at: now,
        };

        let post: BlogPost = entity.into();
        assert_eq!(post.id, 5);
        assert_eq!(post.slug, "terapia-de-casal");
        assert_eq!(post.data_ai_hint.as_deref(), Some("couple talking"));
        assert_eq!(post.created_at, now);
    }
}
