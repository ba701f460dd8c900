//! Tests for the authentication flow
//!
//! Exercise the state machine against an isolated in-memory store: screen
//! transitions, every error kind, and the seeded demo scenarios.

use super::models::{AuthScreen, SignupRequest};
use super::AuthFlow;
use crate::common::AuthError;
use crate::services::verification::FixedCodeVerifier;
use crate::store::models::Role;
use crate::store::seed::{TEST_CLIENT_EMAIL, TEST_PASSWORD, TEST_TALENT_EMAIL};
use crate::store::{MemoryStore, UserStore};

fn seeded_flow() -> AuthFlow<MemoryStore, FixedCodeVerifier> {
    AuthFlow::new(MemoryStore::seeded(), FixedCodeVerifier::default())
}

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        name: "New User".to_string(),
        email: email.to_string(),
        phone: None,
        password: "password123".to_string(),
        confirm_password: "password123".to_string(),
    }
}

#[test]
fn test_initial_screen_is_role_selection() {
    let flow = seeded_flow();
    assert_eq!(flow.screen(), AuthScreen::RoleSelection);
    assert_eq!(flow.role(), None);
}

#[test]
fn test_select_role_moves_to_login() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    assert_eq!(flow.screen(), AuthScreen::Login);
    assert_eq!(flow.role(), Some(Role::Client));
}

#[test]
fn test_login_requires_role_selection() {
    let mut flow = seeded_flow();
    let result = flow.attempt_login(TEST_CLIENT_EMAIL, TEST_PASSWORD, false);
    assert!(matches!(result, Err(AuthError::Validation(_))));
}

#[test]
fn test_login_succeeds_for_seeded_client() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);

    let success = flow
        .attempt_login(TEST_CLIENT_EMAIL, TEST_PASSWORD, true)
        .expect("seeded client credentials must work");

    assert_eq!(success.user.email, TEST_CLIENT_EMAIL);
    assert_eq!(success.user.name, "Test Client");
    assert_eq!(success.user.role, Role::Client);
    assert!(success.remember_me);
}

#[test]
fn test_login_fails_with_role_mismatch_for_wrong_role() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Talent);

    let result = flow.attempt_login(TEST_CLIENT_EMAIL, TEST_PASSWORD, false);
    assert_eq!(
        result.unwrap_err(),
        AuthError::RoleMismatch {
            selected: Role::Talent,
            actual: Role::Client,
        }
    );
}

#[test]
fn test_login_fails_with_not_found_for_unknown_email() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);

    let result = flow.attempt_login("stranger@book.me", "whatever1", false);
    assert!(matches!(result, Err(AuthError::NotFound(_))));
}

#[test]
fn test_login_fails_with_invalid_credentials_for_wrong_password() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);

    let result = flow.attempt_login(TEST_CLIENT_EMAIL, "wrongpassword", false);
    assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
}

#[test]
fn test_login_validates_input_before_store_lookup() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);

    assert!(matches!(
        flow.attempt_login("", TEST_PASSWORD, false),
        Err(AuthError::Validation(_))
    ));
    assert!(matches!(
        flow.attempt_login("not-an-email", TEST_PASSWORD, false),
        Err(AuthError::Validation(_))
    ));
    assert!(matches!(
        flow.attempt_login(TEST_CLIENT_EMAIL, "", false),
        Err(AuthError::Validation(_))
    ));
}

#[test]
fn test_login_email_is_case_insensitive() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);

    let success = flow
        .attempt_login("CLIENT@BOOK.ME", TEST_PASSWORD, false)
        .expect("email lookup is case-insensitive");
    assert_eq!(success.user.email, TEST_CLIENT_EMAIL);
}

#[test]
fn test_signup_then_login_round_trip() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_signup();

    flow.attempt_signup(signup_request("fresh@book.me"))
        .expect("valid signup must succeed");

    assert_eq!(flow.screen(), AuthScreen::Login);
    assert!(flow.take_notice().is_some());
    assert!(flow.take_notice().is_none(), "notice is one-shot");

    let success = flow
        .attempt_login("fresh@book.me", "password123", false)
        .expect("credentials from signup must log in");
    assert_eq!(success.user.email, "fresh@book.me");
}

#[test]
fn test_signup_fails_with_duplicate_email() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_signup();

    let result = flow.attempt_signup(signup_request(TEST_CLIENT_EMAIL));
    assert_eq!(result.unwrap_err(), AuthError::DuplicateEmail);
    assert_eq!(flow.screen(), AuthScreen::Signup, "failure stays on screen");
}

#[test]
fn test_signup_validation_failures() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_signup();

    let mut short_password = signup_request("fresh@book.me");
    short_password.password = "short6!".to_string();
    short_password.confirm_password = "short6!".to_string();
    assert!(matches!(
        flow.attempt_signup(short_password),
        Err(AuthError::Validation(_))
    ));

    let mut mismatch = signup_request("fresh@book.me");
    mismatch.confirm_password = "password124".to_string();
    assert!(matches!(
        flow.attempt_signup(mismatch),
        Err(AuthError::Validation(_))
    ));
}

#[test]
fn test_talent_signup_links_talent_record() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Talent);
    flow.show_signup();

    flow.attempt_signup(signup_request("newtalent@book.me"))
        .expect("valid signup must succeed");

    let user = flow
        .store()
        .find_user_by_email("newtalent@book.me")
        .expect("account exists after signup");
    let talent_id = user.talent_id.expect("talent signup must link a talent");
    assert!(flow.store().get_talent_by_id(&talent_id).is_some());
}

#[test]
fn test_phone_verification_happy_path() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_phone_input();

    flow.send_phone_code("5550177").expect("valid phone");
    assert_eq!(flow.screen(), AuthScreen::PhoneVerify);

    let success = flow.verify_phone_code("123456").expect("mock OTP");
    assert_eq!(success.user.phone.as_deref(), Some("5550177"));
    assert!(!success.remember_me);
}

#[test]
fn test_phone_verification_rejects_wrong_code() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_phone_input();
    flow.send_phone_code("5550177").expect("valid phone");

    let result = flow.verify_phone_code("000000");
    assert_eq!(result.unwrap_err(), AuthError::InvalidCode);
    // Recoverable: retrying with the right code still works
    assert!(flow.verify_phone_code("123456").is_ok());
}

#[test]
fn test_phone_verification_respects_existing_account_role() {
    let mut flow = seeded_flow();
    // Seeded talent account owns phone 5550101
    flow.select_role(Role::Client);
    flow.show_phone_input();
    flow.send_phone_code("5550101").expect("valid phone");

    let result = flow.verify_phone_code("123456");
    assert_eq!(
        result.unwrap_err(),
        AuthError::RoleMismatch {
            selected: Role::Client,
            actual: Role::Talent,
        }
    );
}

#[test]
fn test_phone_code_requires_valid_number() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_phone_input();

    assert!(matches!(
        flow.send_phone_code("12"),
        Err(AuthError::Validation(_))
    ));
    assert_eq!(flow.screen(), AuthScreen::PhoneInput);
}

#[test]
fn test_password_reset_chain() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_forgot_password();

    flow.forgot_password(TEST_CLIENT_EMAIL).expect("known email");
    assert_eq!(flow.screen(), AuthScreen::VerifyCode);

    assert_eq!(
        flow.verify_reset_code("000000").unwrap_err(),
        AuthError::InvalidCode
    );
    flow.verify_reset_code("123456").expect("mock OTP");
    assert_eq!(flow.screen(), AuthScreen::ResetPassword);

    // The 8-char policy applies to reset as well
    assert!(matches!(
        flow.reset_password("short6!", "short6!"),
        Err(AuthError::Validation(_))
    ));
    assert!(matches!(
        flow.reset_password("newpassword1", "different1"),
        Err(AuthError::Validation(_))
    ));

    flow.reset_password("newpassword1", "newpassword1")
        .expect("valid reset");
    assert_eq!(flow.screen(), AuthScreen::Login);

    let success = flow
        .attempt_login(TEST_CLIENT_EMAIL, "newpassword1", false)
        .expect("new password must work");
    assert_eq!(success.user.email, TEST_CLIENT_EMAIL);

    assert_eq!(
        flow.attempt_login(TEST_CLIENT_EMAIL, TEST_PASSWORD, false)
            .unwrap_err(),
        AuthError::InvalidCredentials,
        "old password must stop working"
    );
}

#[test]
fn test_forgot_password_unknown_email() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Client);
    flow.show_forgot_password();

    let result = flow.forgot_password("stranger@book.me");
    assert!(matches!(result, Err(AuthError::NotFound(_))));
    assert_eq!(flow.screen(), AuthScreen::ForgotPassword);
}

#[test]
fn test_go_back_edges() {
    let mut flow = seeded_flow();

    // No effect from the initial screen
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::RoleSelection);

    flow.select_role(Role::Client);
    flow.show_signup();
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::RoleSelection);

    flow.select_role(Role::Client);
    flow.show_phone_input();
    flow.send_phone_code("5550177").expect("valid phone");
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::PhoneInput);
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::RoleSelection);

    flow.select_role(Role::Client);
    flow.show_forgot_password();
    flow.forgot_password(TEST_CLIENT_EMAIL).expect("known email");
    flow.verify_reset_code("123456").expect("mock OTP");
    assert_eq!(flow.screen(), AuthScreen::ResetPassword);
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::VerifyCode);
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::ForgotPassword);
    flow.go_back();
    assert_eq!(flow.screen(), AuthScreen::Login);
}

#[test]
fn test_seeded_talent_can_log_in_as_talent() {
    let mut flow = seeded_flow();
    flow.select_role(Role::Talent);

    let success = flow
        .attempt_login(TEST_TALENT_EMAIL, TEST_PASSWORD, false)
        .expect("seeded talent credentials must work");
    assert_eq!(success.user.role, Role::Talent);
    assert!(success.user.talent_id.is_some());
}
