//! Driving port for creating accounts.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationInput, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate and store a new account.
    ///
    /// Field problems, including a taken username, come back as an
    /// `invalid_request` error with `details.fieldErrors`.
    async fn register(&self, input: RegistrationInput) -> Result<User, Error>;
}
