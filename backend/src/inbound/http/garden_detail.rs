//! Garden detail view and its journal actions.
//!
//! ```text
//! GET  /gardens/{id}/?plant={plant_id}
//! POST /gardens/{id}/?plant={plant_id}   action=generate_ai | action=add_note
//! ```
//!
//! Both actions follow post/redirect/get: success redirects back to the
//! detail view with the plant selection preserved.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::garden::unknown_choice;
use crate::domain::ports::{GardenDetail, PlantSelection};
use crate::domain::{Error, FieldErrors, GardenId, NoteInput, PlantId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::see_other;
use crate::inbound::http::forms::FormFields;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

/// Query string of the detail view.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailQuery {
    /// Plant to select; defaults to the first plant by name.
    pub plant: Option<String>,
}

impl DetailQuery {
    fn selection(&self) -> PlantSelection {
        PlantSelection::from_query(self.plant.as_deref())
    }
}

/// Action submitted from the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    GenerateAi,
    AddNote,
}

impl DetailAction {
    fn parse(fields: &FormFields) -> Result<Self, Error> {
        match fields.first("action").map(str::trim) {
            Some("generate_ai") => Ok(Self::GenerateAi),
            Some("add_note") => Ok(Self::AddNote),
            other => Err(FieldErrors::single(
                "action",
                unknown_choice(other.unwrap_or_default()),
            )),
        }
    }
}

/// Detail form body. `plants` repeats once per plant the note is about.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DetailActionForm {
    #[schema(example = "add_note")]
    action: String,
    content: Option<String>,
    image: Option<String>,
    #[schema(value_type = Vec<uuid::Uuid>)]
    plants: Vec<String>,
}

fn note_input(fields: &FormFields) -> NoteInput {
    NoteInput {
        content: fields.text("content"),
        image: fields.optional("image"),
        plants: fields.all("plants"),
    }
}

/// Path of the detail view, keeping `selected` when there is one.
pub(crate) fn detail_location(garden: &GardenId, selected: Option<&PlantId>) -> String {
    match selected {
        Some(plant) => format!("/gardens/{garden}/?plant={plant}"),
        None => format!("/gardens/{garden}/"),
    }
}

/// Garden, permissions, plants and the selected plant's journal.
#[utoipa::path(
    get,
    path = "/gardens/{garden_id}/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier"), DetailQuery),
    responses(
        (status = 200, description = "Garden detail", body = GardenDetail),
        (status = 303, description = "Not signed in or not permitted"),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "gardenDetail",
    security(("SessionCookie" = []))
)]
#[get("/gardens/{garden_id}/")]
pub async fn garden_detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
) -> ApiResult<web::Json<GardenDetail>> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    let detail = state
        .gardens_query
        .garden_detail(&user_id, &garden_id, query.selection())
        .await?;
    Ok(web::Json(detail))
}

/// Generate a recommendation for, or add a note to, the selected plant.
#[utoipa::path(
    post,
    path = "/gardens/{garden_id}/",
    params(("garden_id" = uuid::Uuid, Path, description = "Garden identifier"), DetailQuery),
    request_body(content = DetailActionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Action handled; redirect to the detail view"),
        (status = 400, description = "Field errors", body = Error),
        (status = 404, description = "Unknown garden", body = Error)
    ),
    tags = ["gardens"],
    operation_id = "gardenDetailAction",
    security(("SessionCookie" = []))
)]
#[post("/gardens/{garden_id}/")]
pub async fn garden_detail_action(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
    form: web::Form<FormFields>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let garden_id: GardenId = parse_path_id(&path)?;
    let selection = query.selection();

    let selected = match DetailAction::parse(&form)? {
        DetailAction::GenerateAi => {
            let outcome = state
                .journal
                .generate_recommendation(&user_id, &garden_id, selection)
                .await?;
            if outcome.written.is_none() {
                debug!(garden_id = %garden_id, "no plant selected; recommendation skipped");
            }
            outcome.selected_plant
        }
        DetailAction::AddNote => {
            let outcome = state
                .journal
                .add_note(&user_id, &garden_id, selection, note_input(&form))
                .await?;
            if outcome.written.is_none() {
                debug!(garden_id = %garden_id, "garden has no plants; note skipped");
            }
            outcome.selected_plant
        }
    };

    Ok(see_other(detail_location(&garden_id, selected.as_ref())))
}

#[cfg(test)]
#[path = "garden_detail_tests.rs"]
mod tests;
