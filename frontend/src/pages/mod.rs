pub mod dashboard;
pub mod wheel;
