pub mod rotation;
pub mod schedule;
