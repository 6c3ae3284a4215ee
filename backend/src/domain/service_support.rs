//! Shared helpers for the journal services: repository error mapping and the
//! garden/plant lookups every use case starts with.

use tracing::debug;

use super::ports::{
    GardenRepository, GardenRepositoryError, NoteRepositoryError, PasswordHashError,
    PlantRepository, PlantRepositoryError, PlantTypeRepositoryError,
    RecommendationRepositoryError, RecommendationSourceError, UserRepositoryError,
};
use super::{Error, Garden, GardenAccess, GardenId, Plant, PlantId, UserId};

macro_rules! map_store_error {
    ($fn_name:ident, $error:ident) => {
        pub(crate) fn $fn_name(error: $error) -> Error {
            match error {
                $error::Connection { message } => {
                    Error::service_unavailable(format!("{} unavailable: {message}", $error::STORE))
                }
                $error::Query { message } => {
                    Error::internal(format!("{} error: {message}", $error::STORE))
                }
            }
        }
    };
}

map_store_error!(map_garden_error, GardenRepositoryError);
map_store_error!(map_plant_error, PlantRepositoryError);
map_store_error!(map_plant_type_error, PlantTypeRepositoryError);
map_store_error!(map_note_error, NoteRepositoryError);
map_store_error!(map_recommendation_error, RecommendationRepositoryError);

pub(crate) fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => Error::service_unavailable(format!(
            "{} unavailable: {message}",
            UserRepositoryError::STORE
        )),
        UserRepositoryError::Query { message } => {
            Error::internal(format!("{} error: {message}", UserRepositoryError::STORE))
        }
        UserRepositoryError::UsernameTaken { username } => {
            Error::conflict(format!("username already taken: {username}"))
        }
    }
}

pub(crate) fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

pub(crate) fn map_source_error(error: RecommendationSourceError) -> Error {
    match error {
        RecommendationSourceError::Unavailable { message } => {
            Error::service_unavailable(format!("recommendation source unavailable: {message}"))
        }
    }
}

/// Load a garden and the caller's permissions, failing when it is missing or
/// not visible to `user`.
pub(crate) async fn visible_garden(
    gardens: &dyn GardenRepository,
    user: &UserId,
    id: &GardenId,
) -> Result<(Garden, GardenAccess), Error> {
    let garden = gardens
        .find_by_id(id)
        .await
        .map_err(map_garden_error)?
        .ok_or_else(|| Error::not_found(format!("garden {id} not found")))?;
    let access = garden.access_for(user);
    if !access.can_view {
        debug!(garden_id = %id, user_id = %user, "garden access denied");
    }
    let access = access.require_view()?;
    Ok((garden, access))
}

/// Load a plant that must belong to `garden`.
pub(crate) async fn plant_in_garden(
    plants: &dyn PlantRepository,
    garden: &GardenId,
    id: &PlantId,
) -> Result<Plant, Error> {
    plants
        .find_by_id(id)
        .await
        .map_err(map_plant_error)?
        .filter(|plant| &plant.garden_id == garden)
        .ok_or_else(|| Error::not_found(format!("plant {id} not found in garden {garden}")))
}
