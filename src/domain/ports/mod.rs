use crate::domain::models::{
    admin::AdminUser, blog::{BlogPost, PostNavRef}, booking::EventBooking,
    enquiry::ContactEnquiry, exception::ScheduleException, location::LocationSlot,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, slot: &LocationSlot) -> Result<LocationSlot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<LocationSlot>, AppError>;
    /// The authoritative read for "are we trading on this date". At most one
    /// row thanks to the partial unique index; ordered by id as a deterministic
    /// fallback should the constraint ever be relaxed.
    async fn find_active_by_date(&self, date: NaiveDate) -> Result<Option<LocationSlot>, AppError>;
    async fn exists_for_date(&self, date: NaiveDate) -> Result<bool, AppError>;
    /// Active slots with `start <= date < end`, ordered (date, start_time) asc.
    async fn list_active_in_range(&self, start: NaiveDate, end: NaiveDate, limit: i64) -> Result<Vec<LocationSlot>, AppError>;
    async fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>, limit: i64, offset: i64) -> Result<Vec<LocationSlot>, AppError>;
    async fn count(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<i64, AppError>;
    async fn update(&self, slot: &LocationSlot) -> Result<LocationSlot, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ExceptionRepository: Send + Sync {
    async fn upsert(&self, exception: &ScheduleException) -> Result<ScheduleException, AppError>;
    async fn list(&self) -> Result<Vec<ScheduleException>, AppError>;
    async fn delete(&self, date: NaiveDate) -> Result<(), AppError>;
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, post: &BlogPost) -> Result<BlogPost, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, AppError>;
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    async fn list_published(&self, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError>;
    async fn count_published(&self) -> Result<i64, AppError>;
    async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<BlogPost>, AppError>;
    async fn count_all(&self) -> Result<i64, AppError>;
    /// Nearest older published post, for previous/next navigation.
    async fn find_previous(&self, published_at: Option<DateTime<Utc>>, created_at: DateTime<Utc>) -> Result<Option<PostNavRef>, AppError>;
    async fn find_next(&self, published_at: Option<DateTime<Utc>>, created_at: DateTime<Utc>) -> Result<Option<PostNavRef>, AppError>;
    async fn update(&self, post: &BlogPost) -> Result<BlogPost, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    async fn create(&self, enquiry: &ContactEnquiry) -> Result<ContactEnquiry, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ContactEnquiry>, AppError>;
    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<ContactEnquiry>, AppError>;
    async fn count(&self, status: Option<&str>) -> Result<i64, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<ContactEnquiry, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &EventBooking) -> Result<EventBooking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<EventBooking>, AppError>;
    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<EventBooking>, AppError>;
    async fn count(&self, status: Option<&str>) -> Result<i64, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<EventBooking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolves a hashed session token to its admin user, provided the session
    /// is unexpired and the user is not banned. Role checks happen upstream.
    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<AdminUser>, AppError>;
}
