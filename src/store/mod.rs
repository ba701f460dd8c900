//! # Store Module
//!
//! The in-memory mock backend. `MemoryStore` owns every collection the app
//! reads and writes: users, talents, posts, reels, conversations and jobs.
//! Lookups return `Option`s or owned clones and never fail; mutations return
//! the updated entity by value so callers re-render on the new value rather
//! than observing shared state.

pub mod conversations;
pub mod feed;
pub mod jobs;
pub mod memory;
pub mod models;
pub mod seed;


pub use jobs::JobValidator;
pub use memory::MemoryStore;
pub use models::{
    Comment, Conversation, Job, Message, MessageSender, NewJob, NewPost, NewUser, Post, Reel,
    Role, Talent, User,
};

/// User lookup and mutation seam between the auth flow and its backing store.
///
/// `MemoryStore` is the mock implementation; a real backend slots in here
/// without touching the state machine.
pub trait UserStore {
    /// Case-insensitive lookup by email
    fn find_user_by_email(&self, email: &str) -> Option<User>;

    fn find_user_by_phone(&self, phone: &str) -> Option<User>;

    /// Insert a new account. Returns `None` on a duplicate email, leaving
    /// the store untouched. A Talent signup also allocates the linked
    /// Talent record.
    fn add_user(&mut self, new_user: NewUser) -> Option<User>;

    /// Look up an account by phone, creating one with the given role when
    /// absent. Role conflicts are the caller's concern.
    fn find_or_create_user_by_phone(&mut self, phone: &str, role: Role) -> User;

    /// Replace the password of the account with this email
    fn update_user_password(&mut self, email: &str, new_password: &str) -> Option<User>;
}
