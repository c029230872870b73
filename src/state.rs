use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    BlogRepository, BookingRepository, EnquiryRepository, ExceptionRepository,
    LocationRepository, SessionRepository,
};
use crate::domain::services::schedule::ScheduleService;
use crate::infra::rate_limit::ApiRateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub location_repo: Arc<dyn LocationRepository>,
    pub exception_repo: Arc<dyn ExceptionRepository>,
    pub blog_repo: Arc<dyn BlogRepository>,
    pub enquiry_repo: Arc<dyn EnquiryRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub schedule_service: Arc<ScheduleService>,
    pub rate_limiter: Arc<ApiRateLimiter>,
}
