//! Session cache read and identity snapshot.
//!
//! The cache itself belongs to the surrounding front end; this module only
//! reads the two values that matter for access decisions - the auth token
//! and the serialized profile - and derives a typed [`ActorIdentity`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::{ActorIdentity, CachedProfile};

/// Session key holding the authentication token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Session key holding the serialized profile.
pub const PROFILE_KEY: &str = "profile";

/// Key-value view of the session cache. Reads are local and synchronous.
pub trait SessionCache: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, anyhow::Error>;
}

/// In-process session cache backed by a mutex-guarded map.
#[derive(Default)]
pub struct MemorySessionCache {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut values) = self.values.lock() {
            values.clear();
        }
    }
}

impl SessionCache for MemorySessionCache {
    fn read(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let values = self
            .values
            .lock()
            .map_err(|e| anyhow::anyhow!("Session cache mutex poisoned: {}", e))?;
        Ok(values.get(key).cloned())
    }
}

/// Reads the cached session and derives the calling actor's identity.
#[derive(Clone)]
pub struct IdentityReader {
    cache: Arc<dyn SessionCache>,
}

impl IdentityReader {
    pub fn new(cache: Arc<dyn SessionCache>) -> Self {
        Self { cache }
    }

    /// Derive the actor identity from the cached session values.
    ///
    /// Missing token or profile means anonymous. A cache read failure or a
    /// profile that fails to parse is logged and also treated as anonymous;
    /// this never errors. No side effects, idempotent, safe on every render.
    pub fn snapshot(&self) -> ActorIdentity {
        let token = self.read_or_warn(ACCESS_TOKEN_KEY);
        let raw_profile = self.read_or_warn(PROFILE_KEY);

        let raw = match (token, raw_profile) {
            (Some(_), Some(raw)) => raw,
            _ => return ActorIdentity::anonymous(),
        };

        match serde_json::from_str::<CachedProfile>(&raw) {
            Ok(profile) => profile.into(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Malformed profile in session cache, treating actor as anonymous"
                );
                ActorIdentity::anonymous()
            }
        }
    }

    fn read_or_warn(&self, key: &str) -> Option<String> {
        match self.cache.read(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Session cache read failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BranchRole;

    fn reader_with(values: Vec<(&str, &str)>) -> IdentityReader {
        let cache = MemorySessionCache::new();
        for (key, value) in values {
            cache.insert(key, value);
        }
        IdentityReader::new(Arc::new(cache))
    }

    #[test]
    fn test_empty_cache_is_anonymous() {
        let reader = reader_with(vec![]);
        assert_eq!(reader.snapshot(), ActorIdentity::anonymous());
    }

    #[test]
    fn test_token_without_profile_is_anonymous() {
        let reader = reader_with(vec![(ACCESS_TOKEN_KEY, "tok")]);
        assert_eq!(reader.snapshot(), ActorIdentity::anonymous());
    }

    #[test]
    fn test_profile_without_token_is_anonymous() {
        let reader = reader_with(vec![(PROFILE_KEY, r#"{"id":"u1"}"#)]);
        assert_eq!(reader.snapshot(), ActorIdentity::anonymous());
    }

    #[test]
    fn test_complete_session_yields_identity() {
        let reader = reader_with(vec![
            (ACCESS_TOKEN_KEY, "tok"),
            (
                PROFILE_KEY,
                r#"{"id":"u1","is_admin":true,"branch_roles":[{"branch_id":"b1","role":"coach"}]}"#,
            ),
        ]);

        let actor = reader.snapshot();
        assert_eq!(actor.user_id.as_deref(), Some("u1"));
        assert!(actor.is_admin);
        assert_eq!(actor.role_in("b1"), Some(BranchRole::Coach));
    }

    #[test]
    fn test_malformed_profile_is_anonymous_not_an_error() {
        let reader = reader_with(vec![(ACCESS_TOKEN_KEY, "tok"), (PROFILE_KEY, "{not json")]);
        assert_eq!(reader.snapshot(), ActorIdentity::anonymous());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let reader = reader_with(vec![
            (ACCESS_TOKEN_KEY, "tok"),
            (PROFILE_KEY, r#"{"id":"u1"}"#),
        ]);
        assert_eq!(reader.snapshot(), reader.snapshot());
    }

    #[test]
    fn test_logout_is_observed_on_next_read() {
        let cache = Arc::new(MemorySessionCache::new());
        cache.insert(ACCESS_TOKEN_KEY, "tok");
        cache.insert(PROFILE_KEY, r#"{"id":"u1"}"#);
        let reader = IdentityReader::new(Arc::clone(&cache) as Arc<dyn SessionCache>);

        assert!(reader.snapshot().is_authenticated());
        cache.clear();
        assert!(!reader.snapshot().is_authenticated());
    }
}
