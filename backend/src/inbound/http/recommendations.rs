//! Recommendation history of a single plant.

use actix_web::{get, web};

use crate::domain::ports::PlantRecommendations;
use crate::domain::{Error, PlantId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_id;

/// Every recommendation generated for a plant, newest first.
#[utoipa::path(
    get,
    path = "/plants/{plant_id}/recommendations/",
    params(("plant_id" = uuid::Uuid, Path, description = "Plant identifier")),
    responses(
        (status = 200, description = "Recommendation log", body = PlantRecommendations),
        (status = 303, description = "Not signed in or not permitted"),
        (status = 404, description = "Unknown plant", body = Error)
    ),
    tags = ["plants"],
    operation_id = "plantRecommendations",
    security(("SessionCookie" = []))
)]
#[get("/plants/{plant_id}/recommendations/")]
pub async fn plant_recommendations(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<PlantRecommendations>> {
    let user_id = session.require_user_id()?;
    let plant_id: PlantId = parse_path_id(&path)?;
    let log = state
        .plants_query
        .plant_recommendations(&user_id, &plant_id)
        .await?;
    Ok(web::Json(log))
}
