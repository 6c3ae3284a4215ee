//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to check credentials without knowing how
//! accounts or digests are stored.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Message returned for any credential mismatch. Unknown usernames and wrong
/// passwords are indistinguishable to the caller.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    ///
    /// A mismatch is an `invalid_request` error carrying
    /// [`INVALID_CREDENTIALS`] as a whole-form message.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
