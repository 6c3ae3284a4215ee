//! Port for one-way password digests.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Hashing or verification could not complete.
        Hash { message: String } => "password hashing failed: {message}",
    }
}

/// Hashing is CPU bound; adapters should keep it off the async executor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest of `password`.
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check `password` against a digest produced by [`PasswordHasher::hash`].
    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError>;
}
