// src/auth/validators.rs

use regex::Regex;
use std::sync::OnceLock;

use super::models::SignupRequest;
use crate::common::{ValidationResult, Validator};

/// One password policy everywhere: signup, reset and change-password.
/// The shipped client enforced 6 on reset and 8 elsewhere; 8 wins.
pub const PASSWORD_MIN_LEN: usize = 8;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap_or_else(|_| unreachable!("static pattern"))
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Phone numbers: digits only after stripping separators, 7-15 digits
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '+'))
        .collect();
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Validate the login form fields
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if email.trim().is_empty() {
        result.add_error("email", "Email is required");
    } else if !is_valid_email(email) {
        result.add_error("email", "Enter a valid email address");
    }

    if password.is_empty() {
        result.add_error("password", "Password is required");
    }

    result
}

/// Validate a new password and its confirmation
pub fn validate_new_password(password: &str, confirm: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.len() < PASSWORD_MIN_LEN {
        result.add_error(
            "password",
            &format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
        );
    }

    if password != confirm {
        result.add_error("confirm_password", "Passwords do not match");
    }

    result
}

// ============================================================================
// Signup Validator
// ============================================================================

pub struct SignupValidator;

impl Validator<SignupRequest> for SignupValidator {
    fn validate(&self, data: &SignupRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        } else if data.name.len() > 100 {
            result.add_error("name", "Name must be less than 100 characters");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !is_valid_email(&data.email) {
            result.add_error("email", "Enter a valid email address");
        }

        if let Some(phone) = &data.phone {
            if !phone.trim().is_empty() && !is_valid_phone(phone) {
                result.add_error("phone", "Enter a valid phone number");
            }
        }

        result.merge(validate_new_password(&data.password, &data.confirm_password));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("client@book.me"));
        assert!(is_valid_email("  padded@book.me  "));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@book.me"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("5550100"));
        assert!(is_valid_phone("+1 (555) 010-0123"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call-me-maybe"));
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("client@book.me", "password123").is_valid);
        assert!(!validate_login("", "password123").is_valid);
        assert!(!validate_login("client@book.me", "").is_valid);
        assert!(!validate_login("not-an-email", "password123").is_valid);
    }

    #[test]
    fn test_validate_new_password_policy() {
        // 8-char minimum applies everywhere, including reset
        assert!(!validate_new_password("short6!", "short6!").is_valid);
        assert!(validate_new_password("longenough", "longenough").is_valid);
        assert!(!validate_new_password("longenough", "different1").is_valid);
    }

    #[test]
    fn test_signup_validator() {
        let valid = SignupRequest {
            name: "New User".to_string(),
            email: "new@book.me".to_string(),
            phone: None,
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
        };
        assert!(SignupValidator.validate(&valid).is_valid);

        let mut missing_name = valid.clone();
        missing_name.name = String::new();
        assert!(!SignupValidator.validate(&missing_name).is_valid);

        let mut mismatch = valid.clone();
        mismatch.confirm_password = "password124".to_string();
        let result = SignupValidator.validate(&mismatch);
        assert!(!result.is_valid);
        assert!(result.summary().contains("confirm_password"));
    }
}
