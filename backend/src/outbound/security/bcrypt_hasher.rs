//! `bcrypt` implementation of the password hashing port.
//!
//! Hashing runs on tokio's blocking pool; a bcrypt round at the default cost
//! takes long enough to stall an executor thread.

use async_trait::async_trait;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Password hasher backed by `bcrypt`.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher using `cost` rounds, between 4 and 31.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, PasswordHashError>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| PasswordHashError::hash(format!("hashing task failed: {err}")))?
        .map_err(|err| PasswordHashError::hash(err.to_string()))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let cost = self.cost;
        run_blocking(move || bcrypt::hash(password.as_str(), cost)).await
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError> {
        let password = zeroize::Zeroizing::new(password.to_owned());
        let digest = digest.to_owned();
        run_blocking(move || bcrypt::verify(password.as_str(), &digest)).await
    }
}
