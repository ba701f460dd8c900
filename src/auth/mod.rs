//! # Auth Module
//!
//! The multi-screen login/signup/verification state machine:
//! - role selection, email login and signup
//! - phone-number verification with a mock OTP
//! - forgot-password / reset-code / new-password chain
//! - deterministic back navigation between screens
//!
//! The flow validates input, delegates lookups and mutations to an injected
//! `UserStore`, and reports every failure as a recoverable `AuthError`.

pub mod flow;
pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

pub use flow::AuthFlow;
pub use models::{AuthScreen, AuthSuccess, SignupRequest};
