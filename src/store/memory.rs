//! The in-memory store and its user-account operations

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::models::{Conversation, Job, NewUser, Post, Reel, Role, Talent, User};
use super::UserStore;
use crate::common::{generate_talent_id, generate_user_id, safe_email_log, safe_phone_log};

/// Holds every collection the app touches. Single-threaded by design: the
/// UI event loop serializes all access, so there is no interior locking.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(super) users: HashMap<String, User>,
    pub(super) talents: HashMap<String, Talent>,
    pub(super) posts: Vec<Post>,
    pub(super) reels: Vec<Reel>,
    /// Ordered: index 0 is the most recently active conversation
    pub(super) conversations: Vec<Conversation>,
    pub(super) jobs: Vec<Job>,
}

impl MemoryStore {
    /// An empty store; tests build on this for isolation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    pub fn get_talent_by_id(&self, id: &str) -> Option<Talent> {
        self.talents.get(id).cloned()
    }

    pub fn talents(&self) -> Vec<Talent> {
        let mut all: Vec<Talent> = self.talents.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Allocate and link a Talent record for a talent-role account
    fn create_linked_talent(&mut self, name: &str) -> String {
        let talent = Talent {
            id: generate_talent_id(),
            name: name.to_string(),
            profession: String::new(),
            rating: 0.0,
            reviews: Vec::new(),
            portfolio: Vec::new(),
            hustles: Vec::new(),
        };
        let id = talent.id.clone();
        self.talents.insert(id.clone(), talent);
        id
    }
}

impl UserStore for MemoryStore {
    fn find_user_by_email(&self, email: &str) -> Option<User> {
        let needle = email.trim().to_lowercase();
        self.users
            .values()
            .find(|u| u.email.to_lowercase() == needle)
            .cloned()
    }

    fn find_user_by_phone(&self, phone: &str) -> Option<User> {
        self.users
            .values()
            .find(|u| u.phone.as_deref() == Some(phone))
            .cloned()
    }

    fn add_user(&mut self, new_user: NewUser) -> Option<User> {
        if self.find_user_by_email(&new_user.email).is_some() {
            warn!(
                email = %safe_email_log(&new_user.email),
                "Refusing to add user: email already registered"
            );
            return None;
        }

        // Phones are unique too; a taken phone is dropped rather than
        // failing the signup, so phone lookups stay unambiguous
        let phone = match new_user.phone {
            Some(p) if self.find_user_by_phone(&p).is_some() => {
                warn!(
                    phone = %safe_phone_log(&p),
                    "Dropping phone from new account: already registered"
                );
                None
            }
            other => other,
        };

        let talent_id = match new_user.role {
            Role::Talent => Some(self.create_linked_talent(&new_user.name)),
            Role::Client => None,
        };

        let user = User {
            id: generate_user_id(),
            email: new_user.email.trim().to_string(),
            phone,
            password: new_user.password,
            name: new_user.name,
            role: new_user.role,
            avatar: None,
            talent_id,
            premium: false,
            verified: false,
            created_at: Utc::now(),
        };

        info!(
            user_id = %user.id,
            email = %safe_email_log(&user.email),
            role = %user.role,
            "User account created"
        );

        self.users.insert(user.id.clone(), user.clone());
        Some(user)
    }

    fn find_or_create_user_by_phone(&mut self, phone: &str, role: Role) -> User {
        if let Some(existing) = self.find_user_by_phone(phone) {
            debug!(
                user_id = %existing.id,
                phone = %safe_phone_log(phone),
                "Found existing account for phone"
            );
            return existing;
        }

        let talent_id = match role {
            Role::Talent => Some(self.create_linked_talent("")),
            Role::Client => None,
        };

        let user = User {
            id: generate_user_id(),
            email: String::new(),
            phone: Some(phone.to_string()),
            password: String::new(),
            name: String::new(),
            role,
            avatar: None,
            talent_id,
            premium: false,
            verified: true,
            created_at: Utc::now(),
        };

        info!(
            user_id = %user.id,
            phone = %safe_phone_log(phone),
            role = %role,
            "User account created via phone verification"
        );

        self.users.insert(user.id.clone(), user.clone());
        user
    }

    fn update_user_password(&mut self, email: &str, new_password: &str) -> Option<User> {
        let needle = email.trim().to_lowercase();
        let user = self
            .users
            .values_mut()
            .find(|u| u.email.to_lowercase() == needle)?;
        user.password = new_password.to_string();

        info!(
            user_id = %user.id,
            email = %safe_email_log(email),
            "Password updated"
        );

        Some(user.clone())
    }
}
