//! Driving port for garden reads and the garden detail view.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    Error, Garden, GardenAccess, GardenId, Note, Plant, PlantId, Recommendation, UserId,
};

/// Which plant the detail view should focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantSelection {
    /// No `plant` parameter, or a blank one: take the first plant by name.
    First,
    /// A specific plant; it must belong to the addressed garden.
    Plant(PlantId),
    /// A `plant` parameter that names nothing usable.
    Unmatched,
}

impl PlantSelection {
    /// Interpret the raw `plant` query parameter.
    ///
    /// # Examples
    /// ```
    /// use garden_journal::domain::ports::PlantSelection;
    ///
    /// assert_eq!(PlantSelection::from_query(None), PlantSelection::First);
    /// assert_eq!(PlantSelection::from_query(Some(" ")), PlantSelection::First);
    /// assert_eq!(PlantSelection::from_query(Some("nope")), PlantSelection::Unmatched);
    /// ```
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::First,
            Some(text) => PlantId::new(text).map_or(Self::Unmatched, Self::Plant),
        }
    }

    /// Resolve the selection against a garden's plants, given in name order.
    pub fn pick<'a>(&self, plants: &'a [Plant]) -> Option<&'a Plant> {
        match self {
            Self::First => plants.first(),
            Self::Plant(id) => plants.iter().find(|plant| &plant.id == id),
            Self::Unmatched => None,
        }
    }
}

/// Gardens on a user's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub owned: Vec<Garden>,
    /// Gardens shared with the user that they do not own.
    pub shared: Vec<Garden>,
}

/// A garden together with the caller's permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenView {
    pub garden: Garden,
    pub access: GardenAccess,
}

/// Garden detail with the selected plant's journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenDetail {
    pub garden: Garden,
    pub access: GardenAccess,
    /// Every plant of the garden by name; also the note form choices.
    pub plants: Vec<Plant>,
    pub selected_plant: Option<Plant>,
    /// Notes of the selected plant, newest first.
    pub notes: Vec<Note>,
    pub latest_recommendation: Option<Recommendation>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GardenQuery: Send + Sync {
    /// Owned and shared gardens of `user`.
    async fn dashboard(&self, user: &UserId) -> Result<Dashboard, Error>;

    /// Every garden `user` can view, by name.
    async fn list_gardens(&self, user: &UserId) -> Result<Vec<Garden>, Error>;

    /// A single visible garden.
    async fn garden_view(&self, user: &UserId, garden: &GardenId) -> Result<GardenView, Error>;

    /// The detail view of a visible garden.
    async fn garden_detail(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
    ) -> Result<GardenDetail, Error>;
}
