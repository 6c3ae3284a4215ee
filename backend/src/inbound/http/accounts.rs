//! Account handlers: landing page, registration, login and logout.
//!
//! ```text
//! GET  /            landing view
//! GET  /register/   registration form     POST /register/  create + log in
//! GET  /login/      login form            POST /login/     authenticate
//! GET|POST /logout/ purge session
//! ```

use actix_web::{HttpResponse, get, post, route, web};
use serde::Serialize;
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{
    Error, ErrorCode, FieldErrors, LoginCredentials, LoginValidationError, RegistrationInput,
    User,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{DASHBOARD_PATH, LOGIN_PATH, see_other};
use crate::inbound::http::forms::FormFields;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

const REQUIRED: &str = "This field is required.";

/// Landing page view model.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    /// Signed-in user, if any.
    pub user: Option<User>,
}

/// Fields a form expects, for clients rendering it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub fields: Vec<String>,
}

impl FormView {
    pub(crate) fn new(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|field| (*field).to_owned()).collect(),
        }
    }
}

/// Registration form body.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegisterForm {
    username: String,
    email: String,
    password1: String,
    password2: String,
}

/// Login form body.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LoginForm {
    username: String,
    password: String,
}

fn registration_input(fields: &FormFields) -> RegistrationInput {
    RegistrationInput {
        username: fields.text("username"),
        email: fields.text("email"),
        password1: Zeroizing::new(fields.raw("password1")),
        password2: Zeroizing::new(fields.raw("password2")),
    }
}

fn login_credentials(fields: &FormFields) -> Result<LoginCredentials, Error> {
    LoginCredentials::try_from_parts(&fields.raw("username"), &fields.raw("password")).map_err(
        |err| match err {
            LoginValidationError::EmptyUsername => FieldErrors::single("username", REQUIRED),
            LoginValidationError::EmptyPassword => FieldErrors::single("password", REQUIRED),
        },
    )
}

/// Landing page; shows who is signed in.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing view", body = LandingView)),
    tags = ["accounts"],
    operation_id = "landing",
    security([])
)]
#[get("/")]
pub async fn landing(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<LandingView>> {
    let user = match session.user_id()? {
        Some(id) => match state.users.current_user(&id).await {
            Ok(user) => Some(user),
            Err(err) if err.code() == ErrorCode::Unauthorized => None,
            Err(err) => return Err(err),
        },
        None => None,
    };
    Ok(web::Json(LandingView { user }))
}

/// Registration form description.
#[utoipa::path(
    get,
    path = "/register/",
    responses((status = 200, description = "Registration form", body = FormView)),
    tags = ["accounts"],
    operation_id = "registerForm",
    security([])
)]
#[get("/register/")]
pub async fn register_form() -> web::Json<FormView> {
    web::Json(FormView::new(&["username", "email", "password1", "password2"]))
}

/// Create an account, sign it in and continue to the dashboard.
#[utoipa::path(
    post,
    path = "/register/",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered; redirect to the dashboard"),
        (status = 400, description = "Field errors", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register/")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let user = state
        .registration
        .register(registration_input(&form))
        .await?;
    session.persist_user(&user.id)?;
    Ok(see_other(DASHBOARD_PATH))
}

/// Login form description.
#[utoipa::path(
    get,
    path = "/login/",
    responses((status = 200, description = "Login form", body = FormView)),
    tags = ["accounts"],
    operation_id = "loginForm",
    security([])
)]
#[get("/login/")]
pub async fn login_form() -> web::Json<FormView> {
    web::Json(FormView::new(&["username", "password"]))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/login/",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in; redirect to the dashboard",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Missing fields or invalid credentials", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let credentials = login_credentials(&form)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(&user.id)?;
    Ok(see_other(DASHBOARD_PATH))
}

/// End the session.
#[utoipa::path(
    method(get, post),
    path = "/logout/",
    responses((status = 303, description = "Session purged; redirect to login")),
    tags = ["accounts"],
    operation_id = "logout",
    security([])
)]
#[route("/logout/", method = "GET", method = "POST")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    see_other(LOGIN_PATH)
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
