// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use bookme::common::safe_email_log;
///
/// let masked = safe_email_log("user@example.com");
/// assert_eq!(masked, "u***@example.com");
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        match parts.as_slice() {
            [local, domain] => match local.chars().next() {
                Some(first) => format!("{}***@{}", first, domain),
                None => "***@***.***".to_string(),
            },
            _ => "***@***.***".to_string(),
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Masks phone numbers for safe logging
/// Shows only the last two digits
pub fn safe_phone_log(phone: &str) -> String {
    if phone.len() > 4 {
        format!("***{}", &phone[phone.len() - 2..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log() {
        assert_eq!(safe_email_log("client@book.me"), "c***@book.me");
        assert_eq!(safe_email_log("not-an-email"), "***@***.***");
        assert_eq!(safe_email_log("a@b"), "***@***.***");
    }

    #[test]
    fn test_safe_email_log_handles_multibyte_local_part() {
        // A multibyte first character must not be byte-sliced
        assert_eq!(safe_email_log("東@a.b"), "東***@a.b");
        assert_eq!(safe_email_log("héllo@book.me"), "h***@book.me");
    }

    #[test]
    fn test_safe_phone_log() {
        assert_eq!(safe_phone_log("5551234567"), "***67");
        assert_eq!(safe_phone_log("123"), "***");
    }
}
