//! Plant handlers nested under a garden.
//!
//! ```text
//! GET  /gardens/{gid}/plants/add/              form          POST create
//! GET  /gardens/{gid}/plants/{pid}/edit/       form + values POST update
//! GET  /gardens/{gid}/plants/{pid}/delete/     confirmation  POST delete
//! ```
//!
//! Every write redirects back to the garden detail view.

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, Garden, GardenId, Plant, PlantId, PlantInput, PlantType, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::see_other;
use crate::inbound::http::forms::FormFields;
use crate::inbound::http::garden_detail::detail_location;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

/// Data for rendering the add/edit plant form.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantFormView {
    pub garden: Garden,
    /// Current values when editing.
    pub plant: Option<Plant>,
    /// Known type names, offered as suggestions.
    pub plant_types: Vec<PlantType>,
}

/// Delete confirmation data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantDeleteView {
    pub garden: Garden,
    pub plant: Plant,
}

/// Plant form body.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PlantForm {
    name: String,
    /// Free-text type; unknown names are added to the registry.
    plant_type_name: String,
    #[schema(format = "date", example = "2024-04-20")]
    planted_date: Option<String>,
    image: Option<String>,
}

fn plant_input(fields: &FormFields) -> PlantInput {
    PlantInput {
        name: fields.text("name"),
        plant_type_name: fields.text("plant_type_name"),
        planted_date: fields.optional("planted_date"),
        image: fields.optional("image"),
    }
}

fn garden_and_plant_ids(path: &(String, String)) -> Result<(GardenId, PlantId), Error> {
    Ok((parse_path_id(&path.0)?, parse_path_id(&path.1)?))
}

/// Load a plant for a form, requiring edit access to its garden.
async fn editable_plant(
    state: &HttpState,
    user_id: &UserId,
    garden_id: &GardenId,
    plant_id: &PlantId,
) -> Result<(Garden, Plant), Error> {
    let view = state
        .plants_query
        .plant_view(user_id, garden_id, plant_id)
        .await?;
    view.garden.access_for(user_id).require_edit()?;
    Ok((view.garden, view.plant))
}

/// Empty plant form for a garden.
#[utoipa::path(
    get,
    path = "/gardens/{garden_id}/plants/add/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier")),
    responses(
        (status = 200, description = "Plant form", body = PlantFormView),
        (status = 303, description = "Not signed in or not permitted"),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["plants"],
    operation_id = "addPlantForm",
    security(("SessionCookie" = []))
)]
#[get("/gardens/{garden_id}/plants/add/")]
pub async fn add_plant_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<PlantFormView>> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    let view = state.gardens_query.garden_view(&user_id, &garden_id).await?;
    view.access.require_edit()?;
    let plant_types = state.plant_types_query.list_plant_types().await?;
    Ok(web::Json(PlantFormView {
        garden: view.garden,
        plant: None,
        plant_types,
    }))
}

/// Add a plant to a garden.
#[utoipa::path(
    post,
    path = "/gardens/{garden_id}/plants/add/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier")),
    request_body(content = PlantForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirect to the garden"),
        (status = 400, description = "Field errors", body = Error),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["plants"],
    operation_id = "addPlant",
    security(("SessionCookie" = []))
)]
#[post("/gardens/{garden_id}/plants/add/")]
pub async fn add_plant(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    let plant = state
        .plants
        .create_plant(&user_id, &garden_id, plant_input(&form))
        .await?;
    Ok(see_other(detail_location(&garden_id, Some(&plant.id))))
}

/// Plant form pre-filled for editing.
#[utoipa::path(
    get,
    path = "/gardens/{garden_id}/plants/{plant_id}/edit/",
    params(
        ("garden_id" = uuid::Uuid, Path, description = "Garden identifier"),
        ("plant_id" = uuid::Uuid, Path, description = "Plant identifier")
    ),
    responses(
        (status = 200, description = "Plant form", body = PlantFormView),
        (status = 303, description = "Not signed in or not permitted"),
        (status = 404, description = "Unknown garden or plant", body = Error)
    ),
    tags = ["plants"],
    operation_id = "editPlantForm",
    security(("SessionCookie" = []))
)]
#[get("/gardens/{garden_id}/plants/{plant_id}/edit/")]
pub async fn edit_plant_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<PlantFormView>> {
    let user_id = session.require_user_id()?;
    let (garden_id, plant_id) = garden_and_plant_ids(&path)?;
    let (garden, plant) = editable_plant(&state, &user_id, &garden_id, &plant_id).await?;
    let plant_types = state.plant_types_query.list_plant_types().await?;
    Ok(web::Json(PlantFormView {
        garden,
        plant: Some(plant),
        plant_types,
    }))
}

/// Update a plant.
#[utoipa::path(
    post,
    path = "/gardens/{garden_id}/plants/{plant_id}/edit/",
    params(
        ("garden_id" = uuid::Uuid, Path, description = "Garden identifier"),
        ("plant_id" = uuid::Uuid, Path, description = "Plant identifier")
    ),
    request_body(content = PlantForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirect to the garden"),
        (status = 400, description = "Field errors", body = Error),
        (status = 404, description = "Unknown garden or plant", body = Error)
    ),
    tags = ["plants"],
    operation_id = "editPlant",
    security(("SessionCookie" = []))
)]
#[post("/gardens/{garden_id}/plants/{plant_id}/edit/")]
pub async fn edit_plant(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let (garden_id, plant_id) = garden_and_plant_ids(&path)?;
    let plant = state
        .plants
        .update_plant(&user_id, &garden_id, &plant_id, plant_input(&form))
        .await?;
    Ok(see_other(detail_location(&garden_id, Some(&plant.id))))
}

/// Confirmation view before deleting a plant.
#[utoipa::path(
    get,
    path = "/gardens/{garden_id}/plants/{plant_id}/delete/",
    params(
        ("garden_id" = uuid::Uuid, Path, description = "Garden identifier"),
        ("plant_id" = uuid::Uuid, Path, description = "Plant identifier")
    ),
    responses(
        (status = 200, description = "Confirmation", body = PlantDeleteView),
        (status = 303, description = "Not signed in or not permitted"),
        (status = 404, description = "Unknown garden or plant", body = Error)
    ),
    tags = ["plants"],
    operation_id = "deletePlantForm",
    security(("SessionCookie" = []))
)]
#[get("/gardens/{garden_id}/plants/{plant_id}/delete/")]
pub async fn delete_plant_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<PlantDeleteView>> {
    let user_id = session.require_user_id()?;
    let (garden_id, plant_id) = garden_and_plant_ids(&path)?;
    let (garden, plant) = editable_plant(&state, &user_id, &garden_id, &plant_id).await?;
    Ok(web::Json(PlantDeleteView { garden, plant }))
}

/// Delete a plant with its recommendations and note links.
#[utoipa::path(
    post,
    path = "/gardens/{garden_id}/plants/{plant_id}/delete/",
    params(
        ("garden_id" = uuid::Uuid, Path, description = "Garden identifier"),
        ("plant_id" = uuid::Uuid, Path, description = "Plant identifier")
    ),
    responses(
        (status = 303, description = "Deleted; redirect to the garden"),
        (status = 404, description = "Unknown garden or plant", body = Error)
    ),
    tags = ["plants"],
    operation_id = "deletePlant",
    security(("SessionCookie" = []))
)]
#[post("/gardens/{garden_id}/plants/{plant_id}/delete/")]
pub async fn delete_plant(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let (garden_id, plant_id) = garden_and_plant_ids(&path)?;
    state
        .plants
        .delete_plant(&user_id, &garden_id, &plant_id)
        .await?;
    Ok(see_other(detail_location(&garden_id, None)))
}

#[cfg(test)]
#[path = "plants_tests.rs"]
mod tests;
