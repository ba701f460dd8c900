//! # Book Me Core
//!
//! The logic core of the Book Me client: a social/booking app connecting
//! service providers ("talent") with clients. This crate holds everything
//! below the rendering layer:
//!
//! - [`auth`] — the multi-screen login/signup/verification state machine
//! - [`store`] — the in-memory mock backend behind every screen
//! - [`session`] — signed-in user persistence across the two storage scopes
//! - [`services`] — injected capabilities: OTP verification, text
//!   generation, theme preferences
//!
//! Everything is synchronous and single-threaded except the text-generation
//! edge, matching the UI event loop it was written for.

pub mod auth;
pub mod common;
pub mod services;
pub mod session;
pub mod store;

pub use auth::{AuthFlow, AuthScreen, AuthSuccess, SignupRequest};
pub use common::AuthError;
pub use session::{KeyValueStorage, MemoryStorage, SessionManager};
pub use store::{MemoryStore, Role, User, UserStore};
