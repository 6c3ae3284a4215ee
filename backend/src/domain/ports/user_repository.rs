//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserAccount, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError for "user repository" {
        /// Another account already uses the username.
        UsernameTaken { username: String } => "username already taken: {username}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account. Fails with `UsernameTaken` on collision.
    async fn create(&self, account: &UserAccount) -> Result<(), UserRepositoryError>;

    /// Fetch an account, digest included, by exact username.
    async fn find_account_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the users among `ids` that exist, in username order.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserRepositoryError>;

    /// Every registered user in username order.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;
}
