pub mod executor;
pub mod profile;
