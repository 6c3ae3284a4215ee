use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserAccount, UserId, Username};

fn sorted(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| a.username.cmp(&b.username));
    users
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, account: &UserAccount) -> Result<(), UserRepositoryError> {
        let mut tables = self.lock(UserRepositoryError::query)?;
        let taken = tables
            .users
            .values()
            .any(|existing| existing.user.username == account.user.username);
        if taken {
            return Err(UserRepositoryError::username_taken(
                account.user.username.as_ref(),
            ));
        }
        tables.users.insert(account.user.id, account.clone());
        Ok(())
    }

    async fn find_account_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, UserRepositoryError> {
        let tables = self.lock(UserRepositoryError::query)?;
        Ok(tables
            .users
            .values()
            .find(|account| &account.user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.lock(UserRepositoryError::query)?;
        Ok(tables.users.get(id).map(|account| account.user.clone()))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserRepositoryError> {
        let tables = self.lock(UserRepositoryError::query)?;
        Ok(sorted(
            ids.iter()
                .filter_map(|id| tables.users.get(id))
                .map(|account| account.user.clone())
                .collect(),
        ))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let tables = self.lock(UserRepositoryError::query)?;
        Ok(sorted(
            tables
                .users
                .values()
                .map(|account| account.user.clone())
                .collect(),
        ))
    }
}
