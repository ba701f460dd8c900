//! # Session Module
//!
//! Persists the signed-in user and reads it back at startup. Storage is
//! abstracted behind a key/value trait with two scopes, mirroring the
//! browser's local vs session storage: "remember me" picks the permanent
//! scope, otherwise the session lives only until the process ends.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::store::models::User;

/// Key the serialized user session is stored under
pub const SESSION_KEY: &str = "bookme.session";

/// Minimal key/value storage surface: both browser storage scopes and the
/// in-memory test double implement this.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory storage, used for tests and the demo binary
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Owns one storage per scope and moves the session between them
pub struct SessionManager<L: KeyValueStorage, S: KeyValueStorage> {
    local: L,
    session: S,
}

impl<L: KeyValueStorage, S: KeyValueStorage> SessionManager<L, S> {
    pub fn new(local: L, session: S) -> Self {
        Self { local, session }
    }

    /// Serialize the user into the scope selected by `remember_me`,
    /// clearing the other scope so exactly one copy exists.
    pub fn save(&mut self, user: &User, remember_me: bool) -> Result<(), serde_json::Error> {
        let payload = serde_json::to_string(user)?;

        if remember_me {
            self.session.remove(SESSION_KEY);
            self.local.set(SESSION_KEY, &payload);
        } else {
            self.local.remove(SESSION_KEY);
            self.session.set(SESSION_KEY, &payload);
        }

        debug!(user_id = %user.id, remember_me, "Session saved");
        Ok(())
    }

    /// Read the stored session back, checking the permanent scope first.
    /// A corrupt payload is logged and treated as signed out.
    pub fn load(&self) -> Option<User> {
        let payload = self
            .local
            .get(SESSION_KEY)
            .or_else(|| self.session.get(SESSION_KEY))?;

        match serde_json::from_str(&payload) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Discarding corrupt session payload");
                None
            }
        }
    }

    /// Remove the session from both scopes (logout)
    pub fn clear(&mut self) {
        self.local.remove(SESSION_KEY);
        self.session.remove(SESSION_KEY);
        debug!("Session cleared");
    }
}
