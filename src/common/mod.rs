// Common module - shared types and utilities across all modules

pub mod error;
pub mod helpers;
pub mod id_generator;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::AuthError;
pub use helpers::{safe_email_log, safe_phone_log};
pub use id_generator::*;
pub use validation::{ValidationError, ValidationResult, Validator};
