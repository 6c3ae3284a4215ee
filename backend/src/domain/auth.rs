//! Authentication primitives: login credentials and validated registrations.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use zeroize::Zeroizing;

use super::{Email, FieldErrors, Username};

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 8;

const REQUIRED: &str = "This field is required.";

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use garden_journal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "s3cret-pass").expect("valid");
/// assert_eq!(creds.username(), "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Raw registration form values as submitted.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password1: Zeroizing<String>,
    pub password2: Zeroizing<String>,
}

/// Registration that passed field validation.
///
/// Username uniqueness is a storage concern and is checked by the account
/// service when the row is written.
#[derive(Debug, Clone)]
pub struct Registration {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate every field, collecting all failures.
    ///
    /// # Examples
    /// ```
    /// use garden_journal::domain::{Registration, RegistrationInput};
    ///
    /// let input = RegistrationInput {
    ///     username: "ada".into(),
    ///     email: "ada@example.com".into(),
    ///     password1: "tomato-vines".to_owned().into(),
    ///     password2: "tomato-vines".to_owned().into(),
    /// };
    /// let registration = Registration::validate(input).expect("valid registration");
    /// assert_eq!(registration.username().as_ref(), "ada");
    /// ```
    pub fn validate(input: RegistrationInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = errors.check("username", Username::new(&input.username));
        let email = errors.check("email", Email::new(&input.email));

        if input.password1.is_empty() {
            errors.add("password1", REQUIRED);
        }
        if input.password2.is_empty() {
            errors.add("password2", REQUIRED);
        }
        if !input.password1.is_empty() && !input.password2.is_empty() {
            if input.password1.as_str() != input.password2.as_str() {
                errors.add("password2", "The two password fields didn't match.");
            } else {
                for message in password_problems(&input.password2, username.as_ref()) {
                    errors.add("password2", message);
                }
            }
        }

        match (username, email) {
            (Some(username), Some(email)) if errors.is_empty() => Ok(Self {
                username,
                email,
                password: input.password1,
            }),
            _ => Err(errors),
        }
    }

    /// Validated username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Validated email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plain-text password, zeroised on drop.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn password_problems(password: &str, username: Option<&Username>) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if username.is_some_and(|name| password.eq_ignore_ascii_case(name.as_ref())) {
        problems.push("The password is too similar to the username.");
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        problems.push("This password is too short. It must contain at least 8 characters.");
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.");
    }
    problems
}
