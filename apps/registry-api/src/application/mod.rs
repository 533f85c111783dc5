// Declare sub-modules within the application layer
pub mod error;
pub mod health;
pub mod plants;
pub mod portfolios;
pub mod tenants;
pub mod views;

pub use error::ApiError;
