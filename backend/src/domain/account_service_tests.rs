//! Tests for the account service.

use std::sync::Arc;

use rstest::{fixture, rstest};
use zeroize::Zeroizing;

use super::*;
use crate::domain::ports::{MockPasswordHasher, MockUserRepository};
use crate::domain::{Email, ErrorCode, NON_FIELD_ERRORS};

#[fixture]
fn ada() -> UserAccount {
    UserAccount {
        user: User {
            id: UserId::random(),
            username: Username::new("ada").expect("username"),
            email: Email::new("ada@example.com").expect("email"),
        },
        password_hash: "digest".into(),
    }
}

fn registration_input(username: &str) -> RegistrationInput {
    RegistrationInput {
        username: username.into(),
        email: format!("{username}@example.com"),
        password1: Zeroizing::new("raised-beds".into()),
        password2: Zeroizing::new("raised-beds".into()),
    }
}

fn service(users: MockUserRepository, hasher: MockPasswordHasher) -> AccountService {
    AccountService::new(Arc::new(users), Arc::new(hasher))
}

#[rstest]
#[tokio::test]
async fn authenticate_returns_user_on_matching_password(ada: UserAccount) {
    let expected = ada.user.clone();
    let mut users = MockUserRepository::new();
    users
        .expect_find_account_by_username()
        .withf(|name| name.as_ref() == "ada")
        .return_once(move |_| Ok(Some(ada)));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|password, digest| password == "raised-beds" && digest == "digest")
        .return_once(|_, _| Ok(true));

    let creds = LoginCredentials::try_from_parts("ada", "raised-beds").expect("creds");
    let user = service(users, hasher)
        .authenticate(&creds)
        .await
        .expect("authenticated");

    assert_eq!(user, expected);
}

#[rstest]
#[tokio::test]
async fn wrong_password_is_a_form_error(ada: UserAccount) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_account_by_username()
        .return_once(move |_| Ok(Some(ada)));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().return_once(|_, _| Ok(false));

    let creds = LoginCredentials::try_from_parts("ada", "nope-nope").expect("creds");
    let err = service(users, hasher)
        .authenticate(&creds)
        .await
        .expect_err("rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.field_messages(NON_FIELD_ERRORS), vec![INVALID_CREDENTIALS]);
}

#[tokio::test]
async fn unknown_username_never_reaches_the_hasher() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_account_by_username()
        .return_once(|_| Ok(None));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().times(0);

    let creds = LoginCredentials::try_from_parts("ghost", "whatever").expect("creds");
    let err = service(users, hasher)
        .authenticate(&creds)
        .await
        .expect_err("rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn register_hashes_and_stores_the_account() {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .withf(|password| password == "raised-beds")
        .return_once(|_| Ok("bcrypt-digest".into()));
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .withf(|account| {
            account.user.username.as_ref() == "grace" && account.password_hash == "bcrypt-digest"
        })
        .times(1)
        .return_once(|_| Ok(()));

    let user = service(users, hasher)
        .register(registration_input("grace"))
        .await
        .expect("registered");

    assert_eq!(user.email.as_ref(), "grace@example.com");
}

#[tokio::test]
async fn taken_username_is_a_field_error() {
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().return_once(|_| Ok("digest".into()));
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .return_once(|_| Err(UserRepositoryError::username_taken("grace")));

    let err = service(users, hasher)
        .register(registration_input("grace"))
        .await
        .expect_err("taken");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.field_messages("username"), vec![USERNAME_TAKEN]);
}

#[tokio::test]
async fn invalid_registration_writes_nothing() {
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_hash().times(0);
    let mut users = MockUserRepository::new();
    users.expect_create().times(0);

    let mut input = registration_input("grace");
    input.password2 = Zeroizing::new("different".into());
    let err = service(users, hasher)
        .register(input)
        .await
        .expect_err("mismatch");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn list_users_excludes_the_caller(ada: UserAccount) {
    let caller = ada.user.clone();
    let other = User {
        id: UserId::random(),
        username: Username::new("bob").expect("username"),
        email: Email::new("bob@example.com").expect("email"),
    };
    let listed = vec![caller.clone(), other.clone()];
    let mut users = MockUserRepository::new();
    users.expect_list_all().return_once(move || Ok(listed));

    let result = service(users, MockPasswordHasher::new())
        .list_users(&caller.id)
        .await
        .expect("listed");

    assert_eq!(result, vec![other]);
}

#[tokio::test]
async fn repository_outage_is_service_unavailable() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(|_| Err(UserRepositoryError::connection("pool exhausted")));

    let err = service(users, MockPasswordHasher::new())
        .current_user(&UserId::random())
        .await
        .expect_err("outage");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
