//! In-memory adapters for every journal repository port.
//!
//! Used when no database is configured and by HTTP tests that drive the full
//! router. One mutex guards every table, so each repository call is atomic
//! and cascades behave like the PostgreSQL foreign keys they stand in for.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::domain::ports::JournalRepositories;
use crate::domain::{
    Garden, GardenId, Note, NoteId, Plant, PlantId, PlantName, PlantType, PlantTypeId,
    Recommendation, UserAccount, UserId,
};

mod gardens;
mod notes;
mod plant_types;
mod plants;
mod recommendations;
mod users;

const POISONED: &str = "memory store lock poisoned";

/// Plant as stored: the type is kept by reference, like the SQL row.
#[derive(Debug, Clone)]
struct PlantRow {
    id: PlantId,
    garden_id: GardenId,
    name: PlantName,
    plant_type_id: Option<PlantTypeId>,
    planted_date: Option<NaiveDate>,
    image: Option<String>,
}

impl PlantRow {
    fn from_plant(plant: &Plant) -> Self {
        Self {
            id: plant.id,
            garden_id: plant.garden_id,
            name: plant.name.clone(),
            plant_type_id: plant.plant_type.as_ref().map(|kind| kind.id),
            planted_date: plant.planted_date,
            image: plant.image.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, UserAccount>,
    gardens: BTreeMap<GardenId, Garden>,
    plants: BTreeMap<PlantId, PlantRow>,
    plant_types: BTreeMap<PlantTypeId, PlantType>,
    notes: BTreeMap<NoteId, Note>,
    recommendations: Vec<Recommendation>,
}

impl Tables {
    fn resolve_plant(&self, row: &PlantRow) -> Plant {
        Plant {
            id: row.id,
            garden_id: row.garden_id,
            name: row.name.clone(),
            plant_type: row
                .plant_type_id
                .and_then(|id| self.plant_types.get(&id).cloned()),
            planted_date: row.planted_date,
            image: row.image.clone(),
        }
    }

    /// Remove plants with their recommendations and note links.
    fn cascade_plants(&mut self, doomed: &[PlantId]) {
        for id in doomed {
            self.plants.remove(id);
        }
        self.recommendations
            .retain(|recommendation| !doomed.contains(&recommendation.plant_id));
        for note in self.notes.values_mut() {
            note.plant_ids.retain(|id| !doomed.contains(id));
        }
    }
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose the store through every repository port.
    ///
    /// # Examples
    /// ```
    /// use garden_journal::outbound::memory::MemoryStore;
    ///
    /// let repos = MemoryStore::new().repositories();
    /// let _ = repos.gardens.clone();
    /// ```
    pub fn repositories(&self) -> JournalRepositories {
        JournalRepositories {
            users: Arc::new(self.clone()),
            gardens: Arc::new(self.clone()),
            plants: Arc::new(self.clone()),
            plant_types: Arc::new(self.clone()),
            notes: Arc::new(self.clone()),
            recommendations: Arc::new(self.clone()),
        }
    }

    fn lock<E>(
        &self,
        to_error: impl FnOnce(&'static str) -> E,
    ) -> Result<MutexGuard<'_, Tables>, E> {
        self.tables.lock().map_err(|_| to_error(POISONED))
    }
}
