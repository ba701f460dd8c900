//! Authentication data models

use serde::{Deserialize, Serialize};

use crate::store::models::User;

/// Which authentication screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScreen {
    RoleSelection,
    Login,
    Signup,
    PhoneInput,
    PhoneVerify,
    ForgotPassword,
    VerifyCode,
    ResetPassword,
}

/// Terminal result of the flow: the authenticated user plus the caller's
/// "remember me" choice, which decides the session persistence scope
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub user: User,
    pub remember_me: bool,
}

/// Signup form fields. The account role comes from the flow's earlier
/// role selection, not from the form.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
}
