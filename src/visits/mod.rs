//! # Visits Module
//!
//! Append-only visit records: who viewed whose map, and when.

pub mod client;
pub mod models;
pub mod store;


pub use client::{VisitApi, VisitClient};
pub use models::Visit;
pub use store::VisitStore;
