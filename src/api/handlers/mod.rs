pub mod blog;
pub mod booking;
pub mod contact;
pub mod enquiry;
pub mod exception;
pub mod health;
pub mod location;
pub mod schedule;
