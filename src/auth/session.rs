// src/auth/session.rs
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

use crate::common::safe_token_log;

/// Durable storage for the bearer token
///
/// One process-wide slot holding the raw token string. Implementations are
/// injected into [`TokenHolder`] so tests can substitute an in-memory fake.
pub trait TokenStorage: Send + Sync {
    /// Read the persisted token, if any
    fn load(&self) -> Option<String>;
    /// Persist the token, replacing any previous value
    fn store(&self, token: &str) -> io::Result<()>;
    /// Remove the persisted token
    fn clear(&self) -> io::Result<()>;
}

/// Token storage backed by a single file on disk
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to read token file");
                None
            }
        }
    }

    fn store(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Holds the session bearer token and builds auth headers
///
/// Cloneable handle over one shared token slot. The slot is loaded from
/// durable storage at construction; `set_token` and `clear` keep storage in
/// sync best-effort (storage failures are logged, the in-memory state always
/// wins).
#[derive(Clone)]
pub struct TokenHolder {
    token: Arc<RwLock<Option<String>>>,
    storage: Arc<dyn TokenStorage>,
}

impl TokenHolder {
    /// Create a holder, loading any previously persisted token
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let token = storage.load();
        if let Some(ref t) = token {
            debug!(token = %safe_token_log(t), "Restored session token from storage");
        }
        Self {
            token: Arc::new(RwLock::new(token)),
            storage,
        }
    }

    /// Store the token received from the OAuth callback
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        if let Err(e) = self.storage.store(token) {
            warn!(error = %e, "Failed to persist session token");
        }
        debug!(token = %safe_token_log(token), "Session token updated");
    }

    /// Current token, if a session is held
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// True iff a token is held
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Headers for API requests
    ///
    /// Always declares a JSON content type; adds the bearer authorization
    /// header iff a token is held.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => {
                    warn!(error = %e, "Token is not a valid header value, sending unauthenticated");
                }
            }
        }

        headers
    }

    /// Drop the in-memory token and best-effort clear durable storage
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "Failed to clear persisted session token");
        }
        debug!("Session token cleared");
    }
}
