pub mod sqlite_location_repo;
pub mod sqlite_exception_repo;
pub mod sqlite_blog_repo;
pub mod sqlite_enquiry_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_session_repo;

pub mod postgres_location_repo;
pub mod postgres_exception_repo;
pub mod postgres_blog_repo;
pub mod postgres_enquiry_repo;
pub mod postgres_booking_repo;
pub mod postgres_session_repo;
