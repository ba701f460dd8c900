//! The authentication state machine
//!
//! Drives which screen is shown and validates input before delegating to
//! the injected `UserStore`. Every operation is synchronous, every error is
//! recoverable, and the machine never reaches a dead end: a failed attempt
//! leaves the current screen in place for correction.
//!
//! State diagram:
//!
//! ```text
//! RoleSelection -> { Login, Signup, PhoneInput }
//! Login         -> ForgotPassword -> VerifyCode -> ResetPassword
//! PhoneInput    -> PhoneVerify
//! ```
//!
//! `go_back` walks each edge in reverse; successful authentication hands an
//! `AuthSuccess` to the caller, who navigates away from the flow entirely.

use tracing::{debug, info, warn};

use super::models::{AuthScreen, AuthSuccess, SignupRequest};
use super::validators::{
    is_valid_email, is_valid_phone, validate_login, validate_new_password, SignupValidator,
};
use crate::common::{safe_email_log, safe_phone_log, AuthError, Validator};
use crate::services::verification::CodeVerifier;
use crate::store::models::{NewUser, Role};
use crate::store::UserStore;

pub struct AuthFlow<S: UserStore, V: CodeVerifier> {
    store: S,
    verifier: V,
    screen: AuthScreen,
    role: Option<Role>,
    pending_phone: Option<String>,
    reset_email: Option<String>,
    notice: Option<String>,
}

impl<S: UserStore, V: CodeVerifier> AuthFlow<S, V> {
    pub fn new(store: S, verifier: V) -> Self {
        Self {
            store,
            verifier,
            screen: AuthScreen::RoleSelection,
            role: None,
            pending_phone: None,
            reset_email: None,
            notice: None,
        }
    }

    pub fn screen(&self) -> AuthScreen {
        self.screen
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// One-shot informational message (e.g. "account created"), cleared on read
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Hand the store back once the flow is done with it
    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Record the selected role and move to the login screen
    pub fn select_role(&mut self, role: Role) {
        debug!(role = %role, "Role selected");
        self.role = Some(role);
        self.screen = AuthScreen::Login;
    }

    pub fn show_login(&mut self) {
        self.screen = AuthScreen::Login;
    }

    pub fn show_signup(&mut self) {
        self.screen = AuthScreen::Signup;
    }

    pub fn show_phone_input(&mut self) {
        self.screen = AuthScreen::PhoneInput;
    }

    pub fn show_forgot_password(&mut self) {
        self.screen = AuthScreen::ForgotPassword;
    }

    /// Deterministic reverse transition per current state.
    /// No effect from the initial screen.
    pub fn go_back(&mut self) {
        self.screen = match self.screen {
            AuthScreen::RoleSelection => AuthScreen::RoleSelection,
            AuthScreen::Login | AuthScreen::Signup | AuthScreen::PhoneInput => {
                AuthScreen::RoleSelection
            }
            AuthScreen::PhoneVerify => AuthScreen::PhoneInput,
            AuthScreen::ForgotPassword => AuthScreen::Login,
            AuthScreen::VerifyCode => AuthScreen::ForgotPassword,
            AuthScreen::ResetPassword => AuthScreen::VerifyCode,
        };
    }

    fn selected_role(&self) -> Result<Role, AuthError> {
        self.role
            .ok_or_else(|| AuthError::validation("Select a role to continue"))
    }

    // ------------------------------------------------------------------
    // Email login / signup
    // ------------------------------------------------------------------

    pub fn attempt_login(
        &mut self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<AuthSuccess, AuthError> {
        let role = self.selected_role()?;

        let validation = validate_login(email, password);
        if !validation.is_valid {
            warn!(
                email = %safe_email_log(email),
                errors = %validation.summary(),
                "Login rejected: invalid input"
            );
            return Err(validation.into());
        }

        let user = self.store.find_user_by_email(email).ok_or_else(|| {
            warn!(email = %safe_email_log(email), "Login failed: unknown email");
            AuthError::NotFound(email.trim().to_string())
        })?;

        if user.role != role {
            warn!(
                user_id = %user.id,
                selected = %role,
                actual = %user.role,
                "Login failed: role mismatch"
            );
            return Err(AuthError::RoleMismatch {
                selected: role,
                actual: user.role,
            });
        }

        if user.password != password {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(
            user_id = %user.id,
            email = %safe_email_log(&user.email),
            role = %user.role,
            remember_me,
            "Login successful"
        );

        Ok(AuthSuccess { user, remember_me })
    }

    /// Create an account with the selected role. On success the flow moves
    /// to the login screen with a notice; the user logs in from there.
    pub fn attempt_signup(&mut self, request: SignupRequest) -> Result<(), AuthError> {
        let role = self.selected_role()?;

        let validation = SignupValidator.validate(&request);
        if !validation.is_valid {
            warn!(
                email = %safe_email_log(&request.email),
                errors = %validation.summary(),
                "Signup rejected: invalid input"
            );
            return Err(validation.into());
        }

        let user = self
            .store
            .add_user(NewUser {
                name: request.name,
                email: request.email.clone(),
                phone: request.phone,
                password: request.password,
                role,
            })
            .ok_or(AuthError::DuplicateEmail)?;

        info!(
            user_id = %user.id,
            email = %safe_email_log(&user.email),
            role = %role,
            "Signup successful"
        );

        self.screen = AuthScreen::Login;
        self.notice = Some("Account created. Log in to continue.".to_string());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Phone verification
    // ------------------------------------------------------------------

    pub fn send_phone_code(&mut self, phone: &str) -> Result<(), AuthError> {
        self.selected_role()?;

        if !is_valid_phone(phone) {
            return Err(AuthError::validation("Enter a valid phone number"));
        }

        self.verifier.send_code(phone);
        self.pending_phone = Some(phone.to_string());
        self.screen = AuthScreen::PhoneVerify;

        debug!(phone = %safe_phone_log(phone), "Phone code sent, awaiting verification");
        Ok(())
    }

    /// Check the entered code and find-or-create the phone account.
    /// An existing account whose role conflicts with the selection fails
    /// without creating anything.
    pub fn verify_phone_code(&mut self, code: &str) -> Result<AuthSuccess, AuthError> {
        let role = self.selected_role()?;
        let phone = self
            .pending_phone
            .clone()
            .ok_or_else(|| AuthError::validation("Enter your phone number first"))?;

        if !self.verifier.verify(code) {
            warn!(phone = %safe_phone_log(&phone), "Phone verification failed: wrong code");
            return Err(AuthError::InvalidCode);
        }

        if let Some(existing) = self.store.find_user_by_phone(&phone) {
            if existing.role != role {
                warn!(
                    user_id = %existing.id,
                    selected = %role,
                    actual = %existing.role,
                    "Phone verification failed: role mismatch"
                );
                return Err(AuthError::RoleMismatch {
                    selected: role,
                    actual: existing.role,
                });
            }
        }

        let user = self.store.find_or_create_user_by_phone(&phone, role);
        self.pending_phone = None;

        info!(
            user_id = %user.id,
            phone = %safe_phone_log(&phone),
            "Phone verification successful"
        );

        Ok(AuthSuccess {
            user,
            remember_me: false,
        })
    }

    // ------------------------------------------------------------------
    // Password reset
    // ------------------------------------------------------------------

    pub fn forgot_password(&mut self, email: &str) -> Result<(), AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::validation("Enter a valid email address"));
        }

        if self.store.find_user_by_email(email).is_none() {
            warn!(email = %safe_email_log(email), "Password reset failed: unknown email");
            return Err(AuthError::NotFound(email.trim().to_string()));
        }

        self.verifier.send_code(email);
        self.reset_email = Some(email.trim().to_string());
        self.screen = AuthScreen::VerifyCode;

        debug!(email = %safe_email_log(email), "Reset code sent, awaiting verification");
        Ok(())
    }

    pub fn verify_reset_code(&mut self, code: &str) -> Result<(), AuthError> {
        if self.reset_email.is_none() {
            return Err(AuthError::validation("Enter your email first"));
        }

        if !self.verifier.verify(code) {
            warn!("Reset code verification failed: wrong code");
            return Err(AuthError::InvalidCode);
        }

        self.screen = AuthScreen::ResetPassword;
        Ok(())
    }

    pub fn reset_password(&mut self, new_password: &str, confirm: &str) -> Result<(), AuthError> {
        let email = self
            .reset_email
            .clone()
            .ok_or_else(|| AuthError::validation("Enter your email first"))?;

        let validation = validate_new_password(new_password, confirm);
        if !validation.is_valid {
            return Err(validation.into());
        }

        self.store
            .update_user_password(&email, new_password)
            .ok_or_else(|| AuthError::NotFound(email.clone()))?;

        info!(email = %safe_email_log(&email), "Password reset successful");

        self.reset_email = None;
        self.screen = AuthScreen::Login;
        self.notice = Some("Password updated. Log in with your new password.".to_string());
        Ok(())
    }
}
