//! Account domain service.
//!
//! Implements the login, registration and user listing driving ports on top
//! of the user repository and a password hasher.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    INVALID_CREDENTIALS, LoginService, PasswordHasher, RegistrationService, UserRepository,
    UserRepositoryError, UsersQuery,
};
use crate::domain::service_support::{map_hash_error, map_user_error};
use crate::domain::{
    Error, FieldErrors, LoginCredentials, Registration, RegistrationInput, User, UserAccount,
    UserId, Username,
};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// Account service implementing [`LoginService`], [`RegistrationService`]
/// and [`UsersQuery`].
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    /// Create the service from its driven ports.
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    fn invalid_credentials() -> Error {
        let mut errors = FieldErrors::new();
        errors.add_non_field(INVALID_CREDENTIALS);
        errors.into_error()
    }
}

#[async_trait]
impl LoginService for AccountService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Ok(username) = Username::new(credentials.username()) else {
            return Err(Self::invalid_credentials());
        };
        let Some(account) = self
            .users
            .find_account_by_username(&username)
            .await
            .map_err(map_user_error)?
        else {
            debug!(%username, "login for unknown username");
            return Err(Self::invalid_credentials());
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &account.password_hash)
            .await
            .map_err(map_hash_error)?;
        if !matches {
            debug!(user_id = %account.user.id, "login with wrong password");
            return Err(Self::invalid_credentials());
        }
        Ok(account.user)
    }
}

#[async_trait]
impl RegistrationService for AccountService {
    async fn register(&self, input: RegistrationInput) -> Result<User, Error> {
        let registration = Registration::validate(input).map_err(FieldErrors::into_error)?;
        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(map_hash_error)?;

        let account = UserAccount {
            user: User {
                id: UserId::random(),
                username: registration.username().clone(),
                email: registration.email().clone(),
            },
            password_hash,
        };
        self.users.create(&account).await.map_err(|err| match err {
            UserRepositoryError::UsernameTaken { .. } => {
                FieldErrors::single("username", USERNAME_TAKEN)
            }
            other => map_user_error(other),
        })?;

        info!(user_id = %account.user.id, username = %account.user.username, "account registered");
        Ok(account.user)
    }
}

#[async_trait]
impl UsersQuery for AccountService {
    async fn list_users(&self, authenticated_user: &UserId) -> Result<Vec<User>, Error> {
        let users = self.users.list_all().await.map_err(map_user_error)?;
        Ok(users
            .into_iter()
            .filter(|user| &user.id != authenticated_user)
            .collect())
    }

    async fn current_user(&self, authenticated_user: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(authenticated_user)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::unauthorized("session user no longer exists"))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
