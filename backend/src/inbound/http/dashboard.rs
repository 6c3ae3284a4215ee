//! Dashboard handler.
//!
//! ```text
//! GET /dashboard/
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Garden, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Gardens the signed-in user owns, and those shared with them.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: User,
    pub owned_gardens: Vec<Garden>,
    pub shared_gardens: Vec<Garden>,
}

/// Owned and shared gardens, each ordered by name.
#[utoipa::path(
    get,
    path = "/dashboard/",
    responses(
        (status = 200, description = "Dashboard", body = DashboardView),
        (status = 303, description = "Not signed in; redirect to login")
    ),
    tags = ["gardens"],
    operation_id = "dashboard",
    security(("SessionCookie" = []))
)]
#[get("/dashboard/")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardView>> {
    let user_id = session.require_user_id()?;
    let user = state.users.current_user(&user_id).await?;
    let dashboard = state.gardens_query.dashboard(&user_id).await?;
    Ok(web::Json(DashboardView {
        user,
        owned_gardens: dashboard.owned,
        shared_gardens: dashboard.shared,
    }))
}
