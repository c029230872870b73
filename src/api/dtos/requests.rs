use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::models::{
    blog::ContentBlock,
    booking::{EVENT_TYPES, GUEST_COUNTS},
    enquiry::ENQUIRY_TYPES,
    exception::EXCEPTION_KINDS,
};
use crate::error::AppError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Per-field error collector; mirrors the shape admin/public forms expect.
#[derive(Default)]
struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0.entry(field.to_string()).or_insert_with(|| message.to_string());
    }

    fn finish(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::FieldValidation(self.0))
        }
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub enquiry_type: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() || self.name.len() > 100 {
            errors.push("name", "Name is required (max 100 characters)");
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push("email", "Invalid email address");
        }
        if !ENQUIRY_TYPES.contains(&self.enquiry_type.as_str()) {
            errors.push("enquiry_type", "Invalid enquiry type");
        }
        if self.message.len() < 10 || self.message.len() > 2000 {
            errors.push("message", "Message must be between 10 and 2000 characters");
        }

        errors.finish()
    }
}

#[derive(Deserialize)]
pub struct EventBookingRequest {
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub guest_count: String,
    pub notes: Option<String>,
}

impl EventBookingRequest {
    pub fn validate(&self, today: NaiveDate) -> Result<(), AppError> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() || self.name.len() > 100 {
            errors.push("name", "Name is required (max 100 characters)");
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push("email", "Invalid email address");
        }
        if !EVENT_TYPES.contains(&self.event_type.as_str()) {
            errors.push("event_type", "Invalid event type");
        }
        if self.event_date <= today {
            errors.push("event_date", "Event date must be in the future");
        }
        if self.location.is_empty() || self.location.len() > 200 {
            errors.push("location", "Location is required (max 200 characters)");
        }
        if !GUEST_COUNTS.contains(&self.guest_count.as_str()) {
            errors.push("guest_count", "Invalid guest count");
        }
        if let Some(ref notes) = self.notes {
            if notes.len() > 2000 {
                errors.push("notes", "Notes must be at most 2000 characters");
            }
        }

        errors.finish()
    }
}

#[derive(Deserialize)]
pub struct LocationSlotRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub what3words: Option<String>,
    pub is_active: Option<bool>,
}

impl LocationSlotRequest {
    /// Returns the parsed (start, end) window on success.
    pub fn validate(&self) -> Result<(NaiveTime, NaiveTime), AppError> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() || self.name.len() > 200 {
            errors.push("name", "Name is required (max 200 characters)");
        }
        if let Some(ref description) = self.description {
            if description.len() > 500 {
                errors.push("description", "Description must be at most 500 characters");
            }
        }

        let start = parse_time(&self.start_time);
        if start.is_none() {
            errors.push("start_time", "Invalid time format (HH:MM)");
        }
        let end = parse_time(&self.end_time);
        if end.is_none() {
            errors.push("end_time", "Invalid time format (HH:MM)");
        }
        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                errors.push("end_time", "End time must be after start time");
            }
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            errors.push("latitude", "Latitude must be between -90 and 90");
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            errors.push("longitude", "Longitude must be between -180 and 180");
        }
        if let Some(ref w3w) = self.what3words {
            if w3w.len() > 100 {
                errors.push("what3words", "what3words must be at most 100 characters");
            }
        }

        errors.finish()?;
        Ok((start.unwrap(), end.unwrap()))
    }
}

#[derive(Deserialize)]
pub struct ExceptionRequest {
    pub date: NaiveDate,
    pub kind: String,
    pub description: Option<String>,
}

impl ExceptionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::default();

        if !EXCEPTION_KINDS.contains(&self.kind.as_str()) {
            errors.push("kind", "Kind must be 'not-trading' or 'private-event'");
        }
        if let Some(ref description) = self.description {
            if description.len() > 500 {
                errors.push("description", "Description must be at most 500 characters");
            }
        }

        errors.finish()
    }
}

#[derive(Deserialize)]
pub struct BlogPostRequest {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw blocks; each is checked against the closed ContentBlock set so an
    /// unknown block type is a validation failure, not a render-time surprise.
    pub content: Vec<serde_json::Value>,
    pub featured_image_url: Option<String>,
    pub reading_time: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl BlogPostRequest {
    /// Returns the validated content blocks on success.
    pub fn validate(&self) -> Result<Vec<ContentBlock>, AppError> {
        let mut errors = FieldErrors::default();

        if !SLUG_RE.is_match(&self.slug) || self.slug.len() > 200 {
            errors.push("slug", "Slug must be lowercase with hyphens (max 200 characters)");
        }
        if self.title.is_empty() || self.title.len() > 200 {
            errors.push("title", "Title is required (max 200 characters)");
        }
        if self.excerpt.is_empty() || self.excerpt.len() > 500 {
            errors.push("excerpt", "Excerpt is required (max 500 characters)");
        }
        if self.content.is_empty() {
            errors.push("content", "At least one content block required");
        }

        let mut blocks = Vec::with_capacity(self.content.len());
        for (idx, raw) in self.content.iter().enumerate() {
            match serde_json::from_value::<ContentBlock>(raw.clone()) {
                Ok(ContentBlock::Paragraph { ref text }) if text.is_empty() => {
                    errors.push(&format!("content[{}]", idx), "Paragraph text is required");
                }
                Ok(ContentBlock::Image { ref src, .. })
                    if !src.starts_with("http://") && !src.starts_with("https://") =>
                {
                    errors.push(&format!("content[{}]", idx), "Image src must be a URL");
                }
                Ok(block) => blocks.push(block),
                Err(_) => {
                    errors.push(&format!("content[{}]", idx), "Unknown or malformed content block");
                }
            }
        }

        if let Some(reading_time) = self.reading_time {
            if !(1..=60).contains(&reading_time) {
                errors.push("reading_time", "Reading time must be between 1 and 60 minutes");
            }
        }
        if let Some(ref tags) = self.tags {
            if tags.len() > 10 || tags.iter().any(|t| t.len() > 50) {
                errors.push("tags", "At most 10 tags of up to 50 characters each");
            }
        }
        if let Some(ref seo_title) = self.seo_title {
            if seo_title.len() > 70 {
                errors.push("seo_title", "SEO title must be at most 70 characters");
            }
        }
        if let Some(ref seo_description) = self.seo_description {
            if seo_description.len() > 160 {
                errors.push("seo_description", "SEO description must be at most 160 characters");
            }
        }

        errors.finish()?;
        Ok(blocks)
    }
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

impl StatusUpdateRequest {
    pub fn validate(&self, allowed: &[&str]) -> Result<(), AppError> {
        if allowed.contains(&self.status.as_str()) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid status '{}', expected one of: {}",
                self.status,
                allowed.join(", ")
            )))
        }
    }
}

#[derive(Deserialize, Default)]
pub struct SeedRequest {
    pub from: Option<NaiveDate>,
    pub days: Option<i64>,
}

#[derive(Deserialize, Default)]
pub struct PaginationParams {
    // `#[serde(flatten)]` routes query values through serde's map machinery,
    // which hands them over as strings; accept both strings and integers so
    // flattened and direct `Query` extraction both parse.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub limit: Option<i64>,
}

fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;

    impl serde::de::Visitor<'_> for Visitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map(Some).map_err(E::custom)
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(Visitor)
}

impl PaginationParams {
    /// (page, limit, offset); page >= 1, limit clamped to 1..=100, default 20.
    pub fn resolve(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(20).clamp(1, 100);
        (page, limit, (page - 1) * limit)
    }
}
