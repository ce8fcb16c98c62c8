//! Tests for the auth module
//!
//! These tests verify session token handling including:
//! - Token round-trip through the holder and durable storage
//! - Auth header construction with and without a token
//! - Callback parameter deserialization

#[cfg(test)]
mod tests {
    use super::super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the token file
    #[derive(Default)]
    struct MemoryStorage {
        slot: Mutex<Option<String>>,
        fail_writes: bool,
    }

    impl TokenStorage for MemoryStorage {
        fn load(&self) -> Option<String> {
            self.slot.lock().unwrap().clone()
        }

        fn store(&self, token: &str) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            *self.slot.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    #[test]
    fn test_set_token_round_trip() {
        let storage = Arc::new(MemoryStorage::default());
        let holder = TokenHolder::new(storage.clone());

        assert!(!holder.is_authenticated());
        assert_eq!(holder.token(), None);

        holder.set_token("tok-123");

        assert!(holder.is_authenticated());
        assert_eq!(holder.token(), Some("tok-123".to_string()));
        assert_eq!(storage.load(), Some("tok-123".to_string()));
    }

    #[test]
    fn test_new_restores_persisted_token() {
        let storage = Arc::new(MemoryStorage::default());
        storage.store("persisted").unwrap();

        let holder = TokenHolder::new(storage);
        assert_eq!(holder.token(), Some("persisted".to_string()));
    }

    #[test]
    fn test_auth_headers_include_bearer_iff_token_held() {
        let holder = TokenHolder::new(Arc::new(MemoryStorage::default()));

        let headers = holder.auth_headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());

        holder.set_token("tok-xyz");
        let headers = holder.auth_headers();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok-xyz");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_clear_drops_token_even_when_storage_fails() {
        let storage = Arc::new(MemoryStorage {
            slot: Mutex::new(Some("tok".to_string())),
            fail_writes: true,
        });
        let holder = TokenHolder::new(storage);
        assert!(holder.is_authenticated());

        holder.clear();

        // Storage write failed but the in-memory session is gone regardless
        assert!(!holder.is_authenticated());
        assert_eq!(holder.token(), None);
    }

    #[test]
    fn test_last_write_wins_across_clones() {
        let holder = TokenHolder::new(Arc::new(MemoryStorage::default()));
        let clone = holder.clone();

        holder.set_token("first");
        clone.set_token("second");

        assert_eq!(holder.token(), Some("second".to_string()));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "mimapa_token_test_{}_{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let storage = FileTokenStorage::new(path.clone());

        assert_eq!(storage.load(), None);
        storage.store("on-disk").unwrap();
        assert_eq!(storage.load(), Some("on-disk".to_string()));
        storage.clear().unwrap();
        assert_eq!(storage.load(), None);
        // Clearing twice is fine
        storage.clear().unwrap();

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_callback_params_from_query() {
        let params: AuthCallbackParams =
            serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(params.token.as_deref(), Some("abc"));
        assert!(params.error.is_none());

        let params: AuthCallbackParams =
            serde_json::from_str(r#"{"error": "access_denied"}"#).unwrap();
        assert!(params.token.is_none());
        assert_eq!(params.error.as_deref(), Some("access_denied"));
    }

    #[test]
    fn test_login_url_shape() {
        let holder = TokenHolder::new(Arc::new(MemoryStorage::default()));
        let client = SessionClient::new(
            reqwest::Client::new(),
            "http://localhost:8000".to_string(),
            holder,
        );
        assert_eq!(client.login_url(), "http://localhost:8000/auth/login/google");
    }
}
