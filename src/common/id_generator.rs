// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., U_K7NP3X for users)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Talent profile (T_)
    Talent,
    /// Post (P_)
    Post,
    /// Reel (R_)
    Reel,
    /// Comment (C_)
    Comment,
    /// Conversation (V_) - V for conVersation, C is taken
    Conversation,
    /// Message (M_)
    Message,
    /// Job listing (J_)
    Job,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Talent => "T",
            EntityPrefix::Post => "P",
            EntityPrefix::Reel => "R",
            EntityPrefix::Comment => "C",
            EntityPrefix::Conversation => "V",
            EntityPrefix::Message => "M",
            EntityPrefix::Job => "J",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// # Arguments
/// * `prefix` - The entity type prefix
///
/// # Returns
/// A string in format "PREFIX_XXXXXX" (e.g., "U_K7NP3X")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Talent ID (T_XXXXXX)
pub fn generate_talent_id() -> String {
    generate_id(EntityPrefix::Talent)
}

/// Generate a Post ID (P_XXXXXX)
pub fn generate_post_id() -> String {
    generate_id(EntityPrefix::Post)
}

/// Generate a Reel ID (R_XXXXXX)
pub fn generate_reel_id() -> String {
    generate_id(EntityPrefix::Reel)
}

/// Generate a Comment ID (C_XXXXXX)
pub fn generate_comment_id() -> String {
    generate_id(EntityPrefix::Comment)
}

/// Generate a Conversation ID (V_XXXXXX)
pub fn generate_conversation_id() -> String {
    generate_id(EntityPrefix::Conversation)
}

/// Generate a Message ID (M_XXXXXX)
pub fn generate_message_id() -> String {
    generate_id(EntityPrefix::Message)
}

/// Generate a Job ID (J_XXXXXX)
pub fn generate_job_id() -> String {
    generate_id(EntityPrefix::Job)
}
