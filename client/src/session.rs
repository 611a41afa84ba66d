use std::collections::HashMap;
use std::sync::RwLock;

/// Storage key for the persisted bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key for the persisted user snapshot.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Persisted key-value storage the session survives reloads in. Backed by
/// browser localStorage in a web shell; the in-memory implementation below is
/// the fallback and the test double.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}
