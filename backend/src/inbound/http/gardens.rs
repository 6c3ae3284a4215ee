//! Garden CRUD handlers.
//!
//! ```text
//! GET  /gardens/                 visible gardens
//! GET  /gardens/add/             form          POST  create
//! GET  /gardens/{id}/edit/       form + values POST  update
//! GET  /gardens/{id}/delete/     confirmation  POST  delete (owner only)
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, Garden, GardenId, GardenInput, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{DASHBOARD_PATH, see_other};
use crate::inbound::http::forms::FormFields;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

const GARDENS_PATH: &str = "/gardens/";

/// Gardens the user may view.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenListView {
    pub gardens: Vec<Garden>,
}

/// Data for rendering the add/edit garden form.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenFormView {
    /// Current values when editing.
    pub garden: Option<Garden>,
    /// Whether the sharing field is editable.
    pub can_edit_users: bool,
    /// Users that may be picked for `shared_users`.
    pub user_choices: Vec<User>,
}

/// Delete confirmation data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenDeleteView {
    pub garden: Garden,
}

/// Garden form body. `shared_users` repeats once per selected user.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GardenForm {
    name: String,
    description: Option<String>,
    image: Option<String>,
    #[schema(value_type = Vec<uuid::Uuid>)]
    shared_users: Vec<String>,
}

pub(crate) fn garden_input(fields: &FormFields) -> GardenInput {
    GardenInput {
        name: fields.text("name"),
        description: fields.optional("description"),
        image: fields.optional("image"),
        shared_users: fields.all("shared_users"),
    }
}

/// List every garden the user owns or has been shared.
#[utoipa::path(
    get,
    path = "/gardens/",
    responses(
        (status = 200, description = "Visible gardens", body = GardenListView),
        (status = 303, description = "Not signed in; redirect to login")
    ),
    tags = ["gardens"],
    operation_id = "listGardens",
    security(("SessionCookie" = []))
)]
#[get("/gardens/")]
pub async fn list_gardens(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<GardenListView>> {
    let user_id = session.require_user_id()?;
    let gardens = state.gardens_query.list_gardens(&user_id).await?;
    Ok(web::Json(GardenListView { gardens }))
}

/// Empty garden form with sharing choices.
#[utoipa::path(
    get,
    path = "/gardens/add/",
    responses(
        (status = 200, description = "Garden form", body = GardenFormView),
        (status = 303, description = "Not signed in; redirect to login")
    ),
    tags = ["gardens"],
    operation_id = "addGardenForm",
    security(("SessionCookie" = []))
)]
#[get("/gardens/add/")]
pub async fn add_garden_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<GardenFormView>> {
    let user_id = session.require_user_id()?;
    let user_choices = state.users.list_users(&user_id).await?;
    Ok(web::Json(GardenFormView {
        garden: None,
        can_edit_users: true,
        user_choices,
    }))
}

/// Create a garden owned by the signed-in user.
#[utoipa::path(
    post,
    path = "/gardens/add/",
    request_body(content = GardenForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirect to the garden list"),
        (status = 400, description = "Field errors", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "addGarden",
    security(("SessionCookie" = []))
)]
#[post("/gardens/add/")]
pub async fn add_garden(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    state
        .gardens
        .create_garden(&user_id, garden_input(&form))
        .await?;
    Ok(see_other(GARDENS_PATH))
}

/// Garden form pre-filled for editing.
#[utoipa::path(
    get,
    path = "/gardens/{garden_id}/edit/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier")),
    responses(
        (status = 200, description = "Garden form", body = GardenFormView),
        (status = 303, description = "Not signed in or not permitted"),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "editGardenForm",
    security(("SessionCookie" = []))
)]
#[get("/gardens/{garden_id}/edit/")]
pub async fn edit_garden_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<GardenFormView>> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    let view = state.gardens_query.garden_view(&user_id, &garden_id).await?;
    let access = view.access.require_edit()?;
    let user_choices = state.users.list_users(&user_id).await?;
    Ok(web::Json(GardenFormView {
        garden: Some(view.garden),
        can_edit_users: access.can_edit_users,
        user_choices,
    }))
}

/// Update a garden. Sharing changes are ignored unless the caller owns it.
#[utoipa::path(
    post,
    path = "/gardens/{garden_id}/edit/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier")),
    request_body(content = GardenForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirect to the garden list"),
        (status = 400, description = "Field errors", body = Error),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "editGarden",
    security(("SessionCookie" = []))
)]
#[post("/gardens/{garden_id}/edit/")]
pub async fn edit_garden(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    state
        .gardens
        .update_garden(&user_id, &garden_id, garden_input(&form))
        .await?;
    Ok(see_other(GARDENS_PATH))
}

/// Confirmation view before deleting a garden.
#[utoipa::path(
    get,
    path = "/gardens/{garden_id}/delete/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier")),
    responses(
        (status = 200, description = "Confirmation", body = GardenDeleteView),
        (status = 303, description = "Not signed in or not the owner"),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "deleteGardenForm",
    security(("SessionCookie" = []))
)]
#[get("/gardens/{garden_id}/delete/")]
pub async fn delete_garden_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<GardenDeleteView>> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    let view = state.gardens_query.garden_view(&user_id, &garden_id).await?;
    view.access.require_delete()?;
    Ok(web::Json(GardenDeleteView {
        garden: view.garden,
    }))
}

/// Delete a garden with its plants.
#[utoipa::path(
    post,
    path = "/gardens/{garden_id}/delete/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier")),
    responses(
        (status = 303, description = "Deleted, or not permitted; redirect to the dashboard"),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "deleteGarden",
    security(("SessionCookie" = []))
)]
#[post("/gardens/{garden_id}/delete/")]
pub async fn delete_garden(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    state.gardens.delete_garden(&user_id, &garden_id).await?;
    Ok(see_other(DASHBOARD_PATH))
}

#[cfg(test)]
#[path = "gardens_tests.rs"]
mod tests;
