use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Post body blocks. Closed set: anything else fails deserialization,
/// so unknown block types are rejected before they reach storage.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_json: String,
    pub featured_image_url: Option<String>,
    pub reading_time: i32,
    pub tags_json: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn new(slug: String, title: String, excerpt: String, content_json: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            title,
            excerpt,
            content_json,
            featured_image_url: None,
            reading_time: 1,
            tags_json: "[]".to_string(),
            is_published: false,
            published_at: None,
            seo_title: None,
            seo_description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn content(&self) -> Vec<ContentBlock> {
        serde_json::from_str(&self.content_json).unwrap_or_default()
    }

    pub fn tags(&self) -> Vec<String> {
        serde_json::from_str(&self.tags_json).unwrap_or_default()
    }
}

/// Slim reference used for previous/next post navigation.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct PostNavRef {
    pub slug: String,
    pub title: String,
}
