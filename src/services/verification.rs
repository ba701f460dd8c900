//! One-time-code verification capability
//!
//! The auth flow never knows how codes are delivered or checked; it holds a
//! `CodeVerifier` and asks. The shipped implementation is the mock used by
//! the demo client: a fixed code, delivery is a log line.

use tracing::info;

/// Sends and checks one-time codes for phone verification and password reset
pub trait CodeVerifier {
    /// Deliver a code to a destination (phone number or email)
    fn send_code(&self, destination: &str);

    /// Check a user-entered code
    fn verify(&self, code: &str) -> bool;
}

/// The mock verifier: one constant code, no delivery
#[derive(Debug, Clone)]
pub struct FixedCodeVerifier {
    code: String,
}

/// The code every seeded demo flow accepts
pub const MOCK_OTP: &str = "123456";

impl FixedCodeVerifier {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Default for FixedCodeVerifier {
    fn default() -> Self {
        Self::new(MOCK_OTP)
    }
}

impl CodeVerifier for FixedCodeVerifier {
    fn send_code(&self, destination: &str) {
        info!(destination = %destination, "Mock verification code sent");
    }

    fn verify(&self, code: &str) -> bool {
        code == self.code
    }
}
