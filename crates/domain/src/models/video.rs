//! Video domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::require_field;
use shared::youtube::{build_embed_url, build_thumbnail_url, extract_youtube_id};
use validator::{Validate, ValidationError, ValidationErrors};

use super::fields::present;

/// A YouTube video registered by the admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for adding a video.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(
        length(max = 2048, message = "URL is too long"),
        custom(function = "validate_youtube_reference")
    )]
    pub url: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Validated fields for a new video. New videos are never featured.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

impl TryFrom<CreateVideoRequest> for NewVideo {
    type Error = ValidationErrors;

    fn try_from(request: CreateVideoRequest) -> Result<Self, Self::Error> {
        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);
        let title = require_field(&mut errors, "title", request.title);
        let url = require_field(&mut errors, "url", request.url);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title,
            url: url.trim().to_string(),
            description: request.description,
        })
    }
}

/// Request payload for `PATCH /api/admin/video/:id`.
///
/// `description: null` clears the description, an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    pub featured: Option<bool>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<Option<String>>,
}

impl UpdateVideoRequest {
    /// True when the request carries no change at all.
    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.description.is_none()
    }
}

fn validate_youtube_reference(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() || extract_youtube_id(url).is_some() {
        // Blank values are reported by the required check.
        Ok(())
    } else {
        let mut err = ValidationError::new("youtube_reference");
        err.message = Some("URL does not reference a YouTube video".into());
        Err(err)
    }
}

/// Video as rendered by the public pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    /// Extracted video ID, empty when the stored URL has none.
    pub youtube_id: String,
    pub thumbnail_url: String,
    pub embed_url: String,
    pub description: String,
}

impl From<Video> for VideoCard {
    fn from(video: Video) -> Self {
        let youtube_id = extract_youtube_id(&video.url).unwrap_or_default();
        Self {
            id: video.id.to_string(),
            title: video.title,
            thumbnail_url: build_thumbnail_url(&youtube_id),
            embed_url: build_embed_url(&youtube_id),
            youtube_id,
            description: video.description.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str) -> Video {
        Video {
            id: 42,
            title: "Mindfulness em 5 minutos".to_string(),
            url: url.to_string(),
            description: None,
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_video_from_request() {
        let req = CreateVideoRequest {
            title: Some("Respiração".to_string()),
            url: Some(" https://youtu.be/dQw4w9WgXcQ ".to_string()),
            description: Some("Exercício guiado".to_string()),
        };
        let new = NewVideo::try_from(req).unwrap();
        assert_eq!(new.url, "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(new.description.as_deref(), Some("Exercício guiado"));
    }

    #[test]
    fn test_new_video_requires_title_and_url() {
        let errors = NewVideo::try_from(CreateVideoRequest::default()).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("url"));
        assert_eq!(fields["url"].len(), 1);
    }

    #[test]
    fn test_new_video_rejects_non_youtube_url() {
        let req = CreateVideoRequest {
            title: Some("X".to_string()),
            url: Some("https://vimeo.com/123".to_string()),
            description: None,
        };
        let errors = NewVideo::try_from(req).unwrap_err();
        assert_eq!(errors.field_errors()["url"][0].code, "youtube_reference");
    }

    #[test]
    fn test_update_request_description_states() {
        let absent: UpdateVideoRequest = serde_json::from_str(r#"{"featured":true}"#).unwrap();
        assert_eq!(absent.featured, Some(true));
        assert_eq!(absent.description, None);

        let cleared: UpdateVideoRequest =
            serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert!(!cleared.is_empty());

        let set: UpdateVideoRequest =
            serde_json::from_str(r#"{"description":"novo texto"}"#).unwrap();
        assert_eq!(set.description, Some(Some("novo texto".to_string())));
    }

    #[test]
    fn test_update_request_empty() {
        let req: UpdateVideoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn test_video_card_from_video() {
        let card = VideoCard::from(video("https://www.youtube.com/shorts/dQw4w9WgXcQ"));
        assert_eq!(card.id, "42");
        assert_eq!(card.youtube_id, "dQw4w9WgXcQ");
        assert_eq!(
            card.thumbnail_url,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(card.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_video_card_without_id() {
        let card = VideoCard::from(video("sem link"));
        assert_eq!(card.youtube_id, "");
        assert_eq!(card.thumbnail_url, "https://img.youtube.com/vi//hqdefault.jpg");
    }

    #[test]
    fn test_video_card_serializes_camel_case() {
        let json = serde_json::to_string(&VideoCard::from(video("dQw4w9WgXcQ"))).unwrap();
        assert!(json.contains("\"youtubeId\":\"dQw4w9WgXcQ\""));
        assert!(json.contains("\"thumbnailUrl\""));
    }
}
