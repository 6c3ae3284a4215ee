//! HTTP inbound adapter: form posts in, JSON view models or redirects out.
//!
//! Every journal route ends with a slash. Register [`configure`] inside a
//! scope wrapped with the session middleware; the health probes and API docs
//! live outside it.

use actix_web::web;

pub mod accounts;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod garden_detail;
pub mod gardens;
pub mod health;
pub mod plant_types;
pub mod plants;
pub mod recommendations;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register every session-backed journal route.
///
/// Literal segments such as `/gardens/add/` are registered before the
/// `{garden_id}` patterns they would otherwise be captured by.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::landing)
        .service(accounts::register_form)
        .service(accounts::register)
        .service(accounts::login_form)
        .service(accounts::login)
        .service(accounts::logout)
        .service(dashboard::dashboard)
        .service(gardens::list_gardens)
        .service(gardens::add_garden_form)
        .service(gardens::add_garden)
        .service(gardens::edit_garden_form)
        .service(gardens::edit_garden)
        .service(gardens::delete_garden_form)
        .service(gardens::delete_garden)
        .service(plants::add_plant_form)
        .service(plants::add_plant)
        .service(plants::edit_plant_form)
        .service(plants::edit_plant)
        .service(plants::delete_plant_form)
        .service(plants::delete_plant)
        .service(garden_detail::garden_detail)
        .service(garden_detail::garden_detail_action)
        .service(plant_types::list_plant_types)
        .service(plant_types::add_plant_type_form)
        .service(plant_types::add_plant_type)
        .service(plant_types::delete_plant_type_form)
        .service(plant_types::delete_plant_type)
        .service(recommendations::plant_recommendations);
}
