pub mod aggregate;
pub mod listing;
pub mod loader;
