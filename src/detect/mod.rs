pub mod classifier;
pub mod detector;
pub mod field_type;
pub mod labels;
