//! # Auth Module
//!
//! This module handles all session-related functionality including:
//! - Bearer token storage (in memory and on disk)
//! - Auth header construction for API requests
//! - Login redirect URL, logout and current-user lookup
//! - OAuth callback parameter handling

pub mod client;
pub mod models;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::SessionClient;
pub use models::{AuthCallbackParams, User};
pub use session::{FileTokenStorage, TokenHolder, TokenStorage};
