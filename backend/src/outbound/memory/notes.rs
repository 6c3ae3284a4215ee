use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{NoteRepository, NoteRepositoryError};
use crate::domain::{Note, PlantId};

#[async_trait]
impl NoteRepository for MemoryStore {
    async fn create(&self, note: &Note) -> Result<(), NoteRepositoryError> {
        let mut tables = self.lock(NoteRepositoryError::query)?;
        if let Some(missing) = note
            .plant_ids
            .iter()
            .find(|id| !tables.plants.contains_key(id))
        {
            return Err(NoteRepositoryError::query(format!(
                "plant {missing} does not exist"
            )));
        }
        tables.notes.insert(note.id, note.clone());
        Ok(())
    }

    async fn list_for_plant(&self, plant: &PlantId) -> Result<Vec<Note>, NoteRepositoryError> {
        let tables = self.lock(NoteRepositoryError::query)?;
        let mut notes: Vec<Note> = tables
            .notes
            .values()
            .filter(|note| note.plant_ids.contains(plant))
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(notes)
    }
}
