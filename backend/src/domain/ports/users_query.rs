//! Driving port for user-facing account queries.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Users the authenticated user may share a garden with: everyone except
    /// themselves, by username.
    async fn list_users(&self, authenticated_user: &UserId) -> Result<Vec<User>, Error>;

    /// Fetch the authenticated user's own account.
    async fn current_user(&self, authenticated_user: &UserId) -> Result<User, Error>;
}
