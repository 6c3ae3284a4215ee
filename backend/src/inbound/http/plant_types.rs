//! Plant type registry handlers.
//!
//! The registry is shared by every garden, so signing in is the only
//! requirement for these routes.

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, PlantType, PlantTypeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::FormView;
use crate::inbound::http::error::see_other;
use crate::inbound::http::forms::FormFields;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

const PLANT_TYPES_PATH: &str = "/plant-types/";

/// Every registered plant type, by name.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantTypeListView {
    pub plant_types: Vec<PlantType>,
}

/// Delete confirmation data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantTypeDeleteView {
    pub plant_type: PlantType,
}

/// Plant type form body.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PlantTypeForm {
    #[schema(example = "Tomato")]
    name: String,
}

/// List plant types.
#[utoipa::path(
    get,
    path = "/plant-types/",
    responses(
        (status = 200, description = "Registered plant types", body = PlantTypeListView),
        (status = 303, description = "Not signed in; redirect to login")
    ),
    tags = ["plant-types"],
    operation_id = "listPlantTypes",
    security(("SessionCookie" = []))
)]
#[get("/plant-types/")]
pub async fn list_plant_types(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PlantTypeListView>> {
    session.require_user_id()?;
    let plant_types = state.plant_types_query.list_plant_types().await?;
    Ok(web::Json(PlantTypeListView { plant_types }))
}

/// Empty plant type form.
#[utoipa::path(
    get,
    path = "/plant-types/add/",
    responses(
        (status = 200, description = "Plant type form", body = FormView),
        (status = 303, description = "Not signed in; redirect to login")
    ),
    tags = ["plant-types"],
    operation_id = "addPlantTypeForm",
    security(("SessionCookie" = []))
)]
#[get("/plant-types/add/")]
pub async fn add_plant_type_form(session: SessionContext) -> ApiResult<web::Json<FormView>> {
    session.require_user_id()?;
    Ok(web::Json(FormView::new(&["name"])))
}

/// Register a plant type; an existing name is reused.
#[utoipa::path(
    post,
    path = "/plant-types/add/",
    request_body(content = PlantTypeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered; redirect to the list"),
        (status = 400, description = "Field errors", body = Error)
    ),
    tags = ["plant-types"],
    operation_id = "addPlantType",
    security(("SessionCookie" = []))
)]
#[post("/plant-types/add/")]
pub async fn add_plant_type(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    state.plant_types.add_plant_type(&form.raw("name")).await?;
    Ok(see_other(PLANT_TYPES_PATH))
}

/// Confirmation view before deleting a plant type.
#[utoipa::path(
    get,
    path = "/plant-types/{plant_type_id}/delete/",
    params(("plant_type_id" = uuid::Uuid, Path, description = "Plant type identifier")),
    responses(
        (status = 200, description = "Confirmation", body = PlantTypeDeleteView),
        (status = 303, description = "Not signed in; redirect to login"),
        (status = 404, description = "Unknown plant type", body = Error)
    ),
    tags = ["plant-types"],
    operation_id = "deletePlantTypeForm",
    security(("SessionCookie" = []))
)]
#[get("/plant-types/{plant_type_id}/delete/")]
pub async fn delete_plant_type_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<PlantTypeDeleteView>> {
    session.require_user_id()?;
    let id: PlantTypeId = parse_path_id(&path)?;
    let plant_type = state.plant_types_query.plant_type(&id).await?;
    Ok(web::Json(PlantTypeDeleteView { plant_type }))
}

/// Delete a plant type. Plants of that type keep existing untyped.
#[utoipa::path(
    post,
    path = "/plant-types/{plant_type_id}/delete/",
    params(("plant_type_id" = uuid::Uuid, Path, description = "Plant type identifier")),
    responses(
        (status = 303, description = "Deleted; redirect to the list"),
        (status = 404, description = "Unknown plant type", body = Error)
    ),
    tags = ["plant-types"],
    operation_id = "deletePlantType",
    security(("SessionCookie" = []))
)]
#[post("/plant-types/{plant_type_id}/delete/")]
pub async fn delete_plant_type(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let id: PlantTypeId = parse_path_id(&path)?;
    state.plant_types.delete_plant_type(&id).await?;
    Ok(see_other(PLANT_TYPES_PATH))
}

#[cfg(test)]
#[path = "plant_types_tests.rs"]
mod tests;
