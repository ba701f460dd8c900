//! Data models for the in-memory store
//!
//! These mirror the shapes the Book Me client renders: user accounts, talent
//! profiles, feed content, conversations and job listings. Everything is
//! plain owned data; the store hands out clones, never references into its
//! own collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role selected at the start of the auth flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Talent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Talent => write!(f, "talent"),
        }
    }
}

/// User account model
///
/// Passwords are stored in plain text because this store is a mock backend.
/// Any adaptation that persists real accounts must hash and salt before
/// storing and compare digests in `UserStore::find_user_by_email` callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    /// Back-reference to the Talent record for role = Talent accounts
    pub talent_id: Option<String>,
    pub premium: bool,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user account
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
}

/// Public service-provider profile, linked 1:1 from its owning User
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,
    pub profession: String,
    pub rating: f32,
    pub reviews: Vec<Review>,
    pub portfolio: Vec<PortfolioItem>,
    pub hustles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: f32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub media_url: String,
}

/// Feed post owned by a talent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub talent_id: String,
    pub caption: String,
    pub image_url: Option<String>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub talent_id: String,
    pub caption: String,
    pub image_url: Option<String>,
}

/// Short-form video owned by a talent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reel {
    pub id: String,
    pub talent_id: String,
    pub caption: String,
    pub video_url: String,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// Comment on a post or reel, carrying its own like state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Resolves to either a User or a Talent for display
    pub user_id: String,
    pub text: String,
    pub likes: u32,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Who sent a message: the current user or the talent on the other side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Me,
    Talent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: MessageSender,
    pub text: String,
    pub read: bool,
    pub sent_at: DateTime<Utc>,
}

/// Ordered thread between the current user and one talent
///
/// `last_message` and `last_message_at` are caches for list rendering and
/// are refreshed by every message mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub talent_id: String,
    pub messages: Vec<Message>,
    pub unread_count: u32,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
}

/// Client-posted job listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub profession: String,
    pub budget: i64,
    pub location: String,
    pub description: Option<String>,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub client_id: String,
    pub title: String,
    pub profession: String,
    pub budget: i64,
    pub location: String,
    pub description: Option<String>,
}
