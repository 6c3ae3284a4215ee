//! Test helpers for inbound HTTP components.
//!
//! [`journal_app`] serves every journal route over the in-memory store so
//! handler tests exercise the real services end to end.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;

use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, JournalAdapters};
use crate::outbound::advisor::PlaceholderAdvisor;
use crate::outbound::memory::MemoryStore;
use crate::outbound::security::BcryptPasswordHasher;
use crate::test_support::{MutableClock, TEST_BCRYPT_COST};

/// Password used by every account created through [`register`].
pub const TEST_PASSWORD: &str = "compost-heap-42";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Handler state over a fresh memory store and a clock pinned to `today`.
pub fn journal_state(today: NaiveDate) -> (HttpState, MemoryStore) {
    let store = MemoryStore::new();
    let state = HttpState::from_adapters(JournalAdapters {
        repositories: store.repositories(),
        hasher: Arc::new(BcryptPasswordHasher::new(TEST_BCRYPT_COST)),
        advisor: Arc::new(PlaceholderAdvisor),
        clock: Arc::new(MutableClock::on(today)),
    });
    (state, store)
}

/// Application serving the journal routes with test session cookies.
pub fn journal_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("")
            .wrap(test_session_middleware())
            .configure(configure),
    )
}

/// `Location` header of a response, if any.
pub fn location<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Session cookie issued by a response, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Register `username` and return the signed-in session cookie.
pub async fn register<S, B>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let email = format!("{username}@example.com");
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/register/")
            .set_form([
                ("username", username),
                ("email", email.as_str()),
                ("password1", TEST_PASSWORD),
                ("password2", TEST_PASSWORD),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER, "registering {username}");
    let Some(cookie) = session_cookie(&res) else {
        panic!("registration of {username} issued no session cookie");
    };
    cookie
}

/// POST `form` to `uri` as the holder of `cookie`.
pub async fn post_form<S, B>(
    app: &S,
    cookie: &Cookie<'static>,
    uri: &str,
    form: &[(&str, &str)],
) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri(uri)
            .cookie(cookie.clone())
            .set_form(form)
            .to_request(),
    )
    .await
}

/// GET `uri` as the holder of `cookie`.
pub async fn get_as<S, B>(app: &S, cookie: &Cookie<'static>, uri: &str) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    actix_test::call_service(
        app,
        actix_test::TestRequest::get().uri(uri).cookie(cookie.clone()).to_request(),
    )
    .await
}

/// GET `uri` as the holder of `cookie` and decode the JSON view model.
pub async fn get_json<S, B>(app: &S, cookie: &Cookie<'static>, uri: &str) -> serde_json::Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = get_as(app, cookie, uri).await;
    assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
    actix_test::read_body_json(res).await
}

/// Identifier of the account signed in with `cookie`.
pub async fn user_id<S, B>(app: &S, cookie: &Cookie<'static>) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let view = get_json(app, cookie, "/dashboard/").await;
    json_str(&view["user"]["id"])
}

/// Create a garden shared with `shared` user ids and return its id.
pub async fn create_garden<S, B>(
    app: &S,
    cookie: &Cookie<'static>,
    name: &str,
    shared: &[&str],
) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let mut form = vec![("name", name)];
    form.extend(shared.iter().map(|id| ("shared_users", *id)));
    let res = post_form(app, cookie, "/gardens/add/", &form).await;
    assert_eq!(location(&res).as_deref(), Some("/gardens/"), "creating {name}");

    let list = get_json(app, cookie, "/gardens/").await;
    let Some(garden) = list["gardens"]
        .as_array()
        .and_then(|gardens| gardens.iter().find(|garden| garden["name"] == name))
    else {
        panic!("garden {name} missing from the list");
    };
    json_str(&garden["id"])
}

/// Add a plant to `garden` and return its id.
pub async fn create_plant<S, B>(
    app: &S,
    cookie: &Cookie<'static>,
    garden: &str,
    name: &str,
    plant_type: &str,
) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let res = post_form(
        app,
        cookie,
        &format!("/gardens/{garden}/plants/add/"),
        &[("name", name), ("plant_type_name", plant_type)],
    )
    .await;
    let Some(target) = location(&res) else {
        panic!("adding {name} did not redirect: {}", res.status());
    };
    let Some((_, plant)) = target.split_once("?plant=") else {
        panic!("redirect {target} does not select the new plant");
    };
    plant.to_owned()
}

fn json_str(value: &serde_json::Value) -> String {
    let Some(text) = value.as_str() else {
        panic!("expected a JSON string, got {value}");
    };
    text.to_owned()
}
