pub mod admin;
pub mod blog;
pub mod booking;
pub mod enquiry;
pub mod exception;
pub mod location;
