pub mod base;
pub mod ser;
pub mod types;
