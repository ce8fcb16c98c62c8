// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::ApiError;
pub use helpers::{safe_email_log, safe_token_log};
