pub mod context;
pub mod document;
pub mod page_model;
