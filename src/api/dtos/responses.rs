use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::models::{
    blog::{BlogPost, ContentBlock, PostNavRef},
    location::LocationSlot,
};
use crate::domain::services::schedule::{format_display_date, format_time_range, DayResolution};

/// Public shape of a schedule slot, with display strings pre-rendered so
/// clients never re-implement date formatting.
#[derive(Serialize)]
pub struct LocationView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub display_date: String,
    pub start_time: String,
    pub end_time: String,
    pub display_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub what3words: Option<String>,
    pub is_active: bool,
}

impl From<LocationSlot> for LocationView {
    fn from(slot: LocationSlot) -> Self {
        Self {
            display_date: format_display_date(slot.date),
            display_time: format_time_range(slot.start_time, slot.end_time),
            id: slot.id,
            name: slot.name,
            description: slot.description,
            date: slot.date,
            start_time: slot.start_time.format("%H:%M").to_string(),
            end_time: slot.end_time.format("%H:%M").to_string(),
            latitude: slot.latitude,
            longitude: slot.longitude,
            what3words: slot.what3words,
            is_active: slot.is_active,
        }
    }
}

/// One resolved calendar day. `location` is null when the trailer is not out;
/// a closed day is a 200 with status "closed", never a 404.
#[derive(Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub display_date: String,
    pub status: &'static str,
    pub location: Option<LocationView>,
}

impl DayView {
    pub fn from_resolution(date: NaiveDate, resolution: DayResolution) -> Self {
        let (status, location) = match resolution {
            DayResolution::Closed => ("closed", None),
            DayResolution::Past(slot) => ("past", Some(slot.into())),
            DayResolution::Scheduled(slot) => ("scheduled", Some(slot.into())),
        };
        Self {
            date,
            display_date: format_display_date(date),
            status,
            location,
        }
    }
}

#[derive(Serialize)]
pub struct UpcomingView {
    pub locations: Vec<LocationView>,
}

#[derive(Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit.max(1),
        }
    }
}

#[derive(Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct PostSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub featured_image_url: Option<String>,
    pub reading_time: i32,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<BlogPost> for PostSummary {
    fn from(post: BlogPost) -> Self {
        let tags = post.tags();
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            featured_image_url: post.featured_image_url,
            reading_time: post.reading_time,
            tags,
            is_published: post.is_published,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct PostNavigation {
    pub previous: Option<PostNavRef>,
    pub next: Option<PostNavRef>,
}

#[derive(Serialize)]
pub struct PostDetail {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: Vec<ContentBlock>,
    pub featured_image_url: Option<String>,
    pub reading_time: i32,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub navigation: PostNavigation,
}

impl PostDetail {
    pub fn new(post: BlogPost, navigation: PostNavigation) -> Self {
        let content = post.content();
        let tags = post.tags();
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            content,
            featured_image_url: post.featured_image_url,
            reading_time: post.reading_time,
            tags,
            is_published: post.is_published,
            published_at: post.published_at,
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            created_at: post.created_at,
            updated_at: post.updated_at,
            navigation,
        }
    }
}

/// Acknowledgement for public form submissions.
#[derive(Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Outcome of an offline rotation seed run.
#[derive(Serialize)]
pub struct SeedResponse {
    pub created: usize,
    pub skipped: usize,
}
