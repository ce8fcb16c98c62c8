//! # Markers Module
//!
//! This module handles everything around map markers:
//! - Marker CRUD calls against the backend
//! - Other users' published maps
//! - The reactive marker store with its short-lived read cache

pub mod client;
pub mod models;
pub mod store;


pub use client::{MarkerApi, MarkerClient};
pub use models::{Marker, MarkerCreate, UserMapResponse};
pub use store::MarkerStore;
