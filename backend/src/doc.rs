//! OpenAPI document for the journal HTTP surface.
//!
//! Served by Swagger UI in debug builds and exported by the `openapi-dump`
//! binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::ports::{Dashboard, GardenDetail, GardenView, PlantRecommendations, PlantView};
use crate::domain::{
    Error, ErrorCode, Garden, GardenAccess, Note, Plant, PlantType, Recommendation, User,
};
use crate::inbound::http::accounts::{FormView, LandingView, LoginForm, RegisterForm};
use crate::inbound::http::dashboard::DashboardView;
use crate::inbound::http::garden_detail::DetailActionForm;
use crate::inbound::http::gardens::{GardenDeleteView, GardenForm, GardenFormView, GardenListView};
use crate::inbound::http::plant_types::{PlantTypeDeleteView, PlantTypeForm, PlantTypeListView};
use crate::inbound::http::plants::{PlantDeleteView, PlantForm, PlantFormView};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login/ or POST /register/.",
            ))),
        );
    }
}

/// OpenAPI document for the garden journal.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Garden journal API",
        description = "Form-driven gardening journal: gardens, plants, notes and advice."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::landing,
        crate::inbound::http::accounts::register_form,
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login_form,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::dashboard::dashboard,
        crate::inbound::http::gardens::list_gardens,
        crate::inbound::http::gardens::add_garden_form,
        crate::inbound::http::gardens::add_garden,
        crate::inbound::http::gardens::edit_garden_form,
        crate::inbound::http::gardens::edit_garden,
        crate::inbound::http::gardens::delete_garden_form,
        crate::inbound::http::gardens::delete_garden,
        crate::inbound::http::garden_detail::garden_detail,
        crate::inbound::http::garden_detail::garden_detail_action,
        crate::inbound::http::plants::add_plant_form,
        crate::inbound::http::plants::add_plant,
        crate::inbound::http::plants::edit_plant_form,
        crate::inbound::http::plants::edit_plant,
        crate::inbound::http::plants::delete_plant_form,
        crate::inbound::http::plants::delete_plant,
        crate::inbound::http::plant_types::list_plant_types,
        crate::inbound::http::plant_types::add_plant_type_form,
        crate::inbound::http::plant_types::add_plant_type,
        crate::inbound::http::plant_types::delete_plant_type_form,
        crate::inbound::http::plant_types::delete_plant_type,
        crate::inbound::http::recommendations::plant_recommendations,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error, ErrorCode, User, Garden, GardenAccess, Plant, PlantType, Note, Recommendation,
        Dashboard, GardenView, GardenDetail, PlantView, PlantRecommendations,
        LandingView, FormView, RegisterForm, LoginForm, DashboardView,
        GardenListView, GardenFormView, GardenDeleteView, GardenForm, DetailActionForm,
        PlantFormView, PlantDeleteView, PlantForm,
        PlantTypeListView, PlantTypeDeleteView, PlantTypeForm,
    )),
    tags(
        (name = "accounts", description = "Registration, login and logout"),
        (name = "gardens", description = "Gardens, sharing and the journal view"),
        (name = "plants", description = "Plants and their recommendations"),
        (name = "plant-types", description = "Shared plant type registry"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
