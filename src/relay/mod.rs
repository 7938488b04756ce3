pub mod generate;
pub mod provider;
