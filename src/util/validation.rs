//! Client-side validation gates for the login and signup forms.
//!
//! DESIGN
//! ======
//! Each gate runs its checks in a fixed order and reports only the first
//! failure. On success it returns the wire payload, so a request can only be
//! built from input that passed the gate.
//!
//! Password strength is a UI hint applied when an account is created; the
//! login gate never inspects password content.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{LoginRequest, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw login form values, read at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Raw signup form values, read at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

/// A password strength rule, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordRule {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
}

/// Validation failure. `Display` is the message shown in the alert area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a password")]
    MissingPassword,
    #[error(transparent)]
    WeakPassword(#[from] PasswordRule),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please agree to the Terms and Conditions")]
    TermsNotAccepted,
}

/// Check `password` against the strength rules, reporting the first one it
/// violates.
///
/// # Errors
///
/// Returns the first violated `PasswordRule`.
pub fn check_password_strength(password: &str) -> Result<(), PasswordRule> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordRule::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordRule::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordRule::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordRule::MissingDigit);
    }
    Ok(())
}

/// Login gate: email (trimmed) and password (verbatim) must be non-empty.
///
/// # Errors
///
/// Returns `ValidationError::MissingCredentials` when either is empty.
pub fn validate_login(input: &LoginInput) -> Result<LoginRequest, ValidationError> {
    let email = input.email.trim();
    if email.is_empty() || input.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: input.password.clone(),
        remember_me: input.remember_me,
    })
}

/// Signup gate: name, email, password, strength, match, terms.
///
/// # Errors
///
/// Returns the first failing check as a `ValidationError`.
pub fn validate_signup(input: &SignupInput) -> Result<SignupRequest, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let email = input.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if input.password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    check_password_strength(&input.password)?;
    if input.password != input.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !input.agree_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
    })
}
