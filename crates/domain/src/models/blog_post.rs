//! Blog post domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::slug::slugify;
use shared::validation::{require_field, validate_not_blank, validate_slug};
use validator::{Validate, ValidationErrors};

use super::fields::present;

/// Cover shown on cards for posts without their own image.
pub const PLACEHOLDER_COVER_URL: &str = "https://placehold.co/600x400.png";

/// A published blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
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

/// Request payload for creating a post.
///
/// Required fields are optional here so that a missing field surfaces as a
/// validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Slug must be at most 255 characters"))]
    pub slug: Option<String>,

    pub summary: Option<String>,

    #[validate(length(max = 2048, message = "Cover image URL is too long"))]
    pub cover_image_url: Option<String>,

    pub data_ai_hint: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub content: Option<String>,
}

/// Validated fields for a new post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
    pub data_ai_hint: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<CreateBlogPostRequest> for NewBlogPost {
    type Error = ValidationErrors;

    fn try_from(request: CreateBlogPostRequest) -> Result<Self, Self::Error> {
        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);

        let title = require_field(&mut errors, "title", request.title);
        let slug = require_field(&mut errors, "slug", request.slug);

        if !slug.is_empty() {
            if let Err(mut err) = validate_slug(&slug) {
                let suggestion = slugify(&slug);
                if !suggestion.is_empty() {
                    err.message = Some(
                        format!("Slug must be URL-safe, for example \"{}\"", suggestion).into(),
                    );
                }
                errors.add("slug", err);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            title,
            slug,
            summary: request.summary,
            cover_image_url: request.cover_image_url,
            data_ai_hint: request.data_ai_hint,
            category: request.category,
            content: request.content,
        })
    }
}

/// Request payload for updating a post, identified by its slug.
///
/// Absent fields are left unchanged and `null` clears an optional field.
/// The slug itself cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub slug: Option<String>,

    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub summary: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 2048, message = "Cover image URL is too long"))]
    pub cover_image_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub data_ai_hint: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
}

impl UpdateBlogPostRequest {
    /// Splits the request into the target slug and the field changes.
    pub fn into_parts(self) -> Result<(String, BlogPostChanges), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);
        let slug = require_field(&mut errors, "slug", self.slug);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok((
            slug,
            BlogPostChanges {
                title: self.title,
                summary: self.summary,
                cover_image_url: self.cover_image_url,
                data_ai_hint: self.data_ai_hint,
                category: self.category,
                content: self.content,
            },
        ))
    }
}

/// Partial update of a post.
///
/// `None` keeps the stored value. For the optional columns `Some(None)`
/// stores NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub summary: Option<Option<String>>,
    pub cover_image_url: Option<Option<String>>,
    pub data_ai_hint: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub content: Option<Option<String>>,
}

/// Query string accepted by the blog collection endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostQuery {
    pub slug: Option<String>,
}

/// Post as shown on the home page cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub cover_image_url: String,
    pub data_ai_hint: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub content: Option<String>,
}

impl From<BlogPost> for PostCard {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            slug: post.slug,
            summary: post.summary,
            cover_image_url: post
                .cover_image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string()),
            data_ai_hint: post.data_ai_hint,
            category: post.category,
            created_at: post.created_at,
            content: post.content,
        }
    }
}
