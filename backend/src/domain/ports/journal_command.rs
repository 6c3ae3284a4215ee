//! Driving port for the actions posted from the garden detail view.

use async_trait::async_trait;

use crate::domain::{Error, GardenId, Note, NoteInput, PlantId, Recommendation, UserId};

use super::PlantSelection;

/// Result of a detail-view action.
///
/// `selected_plant` is the plant the view should return to, if the selection
/// resolved. `written` is `None` when the action was inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalOutcome<T> {
    pub selected_plant: Option<PlantId>,
    pub written: Option<T>,
}

impl<T> JournalOutcome<T> {
    /// Outcome of an action that wrote nothing.
    pub fn inert() -> Self {
        Self {
            selected_plant: None,
            written: None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalCommand: Send + Sync {
    /// Record a note against plants of `garden`.
    async fn add_note(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
        input: NoteInput,
    ) -> Result<JournalOutcome<Note>, Error>;

    /// Append a recommendation for the selected plant.
    async fn generate_recommendation(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
    ) -> Result<JournalOutcome<Recommendation>, Error>;
}
