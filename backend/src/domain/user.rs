//! Account identity: usernames, email addresses and the public user view.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Maximum username length in characters.
pub const USERNAME_MAX: usize = 150;
/// Maximum email length in characters.
pub const EMAIL_MAX: usize = 254;

/// Validation errors returned by [`Username::new`] and [`Email::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Username was blank.
    #[error("This field is required.")]
    EmptyUsername,
    /// Username exceeded [`USERNAME_MAX`].
    #[error("Ensure this value has at most {max} characters.")]
    UsernameTooLong { max: usize },
    /// Username used characters outside the allowed set.
    #[error(
        "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
    )]
    UsernameInvalidCharacters,
    /// Email was blank.
    #[error("This field is required.")]
    EmptyEmail,
    /// Email did not look like `local@domain.tld`.
    #[error("Enter a valid email address.")]
    InvalidEmail,
}

/// Unique, case-sensitive login name.
///
/// ## Invariants
/// - Trimmed, non-empty and at most [`USERNAME_MAX`] characters.
/// - Only letters, digits and `@ . + - _`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a username.
    ///
    /// # Examples
    /// ```
    /// use garden_journal::domain::Username;
    ///
    /// let name = Username::new("  ada.l ").expect("valid username");
    /// assert_eq!(name.as_ref(), "ada.l");
    /// assert!(Username::new("ada lovelace").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
        if !trimmed.chars().all(allowed) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Contact address collected at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX || trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(UserValidationError::InvalidEmail);
        };
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Public view of a registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[schema(value_type = String, example = "ada")]
    pub username: Username,
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: Email,
}

/// Stored account including the password digest.
///
/// Never serialised; the digest stays inside the domain and persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub user: User,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyUsername)]
    #[case("   ", UserValidationError::EmptyUsername)]
    #[case("has space", UserValidationError::UsernameInvalidCharacters)]
    #[case("semi;colon", UserValidationError::UsernameInvalidCharacters)]
    fn invalid_usernames(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(Username::new(raw).expect_err("invalid username"), expected);
    }

    #[rstest]
    fn overlong_username_is_rejected() {
        let raw = "a".repeat(USERNAME_MAX + 1);
        assert_eq!(
            Username::new(raw).expect_err("too long"),
            UserValidationError::UsernameTooLong { max: USERNAME_MAX }
        );
    }

    #[rstest]
    #[case("ada@example.com")]
    #[case("first.last+tag@garden.example.org")]
    fn valid_emails(#[case] raw: &str) {
        assert_eq!(Email::new(raw).expect("valid email").as_ref(), raw);
    }

    #[rstest]
    #[case("", UserValidationError::EmptyEmail)]
    #[case("no-at-sign", UserValidationError::InvalidEmail)]
    #[case("@example.com", UserValidationError::InvalidEmail)]
    #[case("ada@localhost", UserValidationError::InvalidEmail)]
    #[case("ada@exa mple.com", UserValidationError::InvalidEmail)]
    #[case("ada@@example.com", UserValidationError::InvalidEmail)]
    fn invalid_emails(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(Email::new(raw).expect_err("invalid email"), expected);
    }

    #[rstest]
    fn usernames_are_case_sensitive() {
        let lower = Username::new("ada").expect("valid");
        let upper = Username::new("Ada").expect("valid");
        assert_ne!(lower, upper);
    }
}
