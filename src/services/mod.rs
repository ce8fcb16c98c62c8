// src/services/mod.rs
//
// Shared services used across the domain modules

pub mod image;

// Re-export commonly used items for convenience
pub use image::{compress_to_data_url, sniff_mime, ImageError};
