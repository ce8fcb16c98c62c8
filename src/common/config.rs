// src/common/config.rs
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Default backend base URL when MIMAPA_API_URL is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration, loaded once at application start
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the MiMapa backend, without trailing slash
    pub api_url: String,
    /// Path of the file holding the persisted bearer token
    pub token_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Honors a `.env` file in the working directory. Recognized variables:
    /// - MIMAPA_API_URL - backend base URL (default http://localhost:8000)
    /// - MIMAPA_TOKEN_FILE - token file path (default ~/.mimapa/auth_token)
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = env::var("MIMAPA_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();

        let token_file = match env::var("MIMAPA_TOKEN_FILE") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::default_token_file(),
        };

        Self {
            api_url,
            token_file,
        }
    }

    /// Default location of the persisted token: ~/.mimapa/auth_token
    fn default_token_file() -> PathBuf {
        match home::home_dir() {
            Some(dir) => dir.join(".mimapa").join("auth_token"),
            None => {
                warn!("Could not determine home directory, storing token in working directory");
                PathBuf::from(".mimapa_auth_token")
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: Self::default_token_file(),
        }
    }
}
