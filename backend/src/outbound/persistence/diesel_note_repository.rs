//! PostgreSQL-backed `NoteRepository` implementation using Diesel ORM.
//!
//! A note and its `note_plants` links are written in one transaction.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{NoteRepository, NoteRepositoryError};
use crate::domain::{Note, NoteId, PlantId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewNoteRow, NotePlantRow, NoteRow};
use super::pool::{DbPool, PoolError};
use super::schema::{note_plants, notes};

/// Diesel-backed implementation of the note repository port.
#[derive(Clone)]
pub struct DieselNoteRepository {
    pool: DbPool,
}

impl DieselNoteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NoteRepositoryError {
    map_basic_pool_error(error, |message| NoteRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> NoteRepositoryError {
    map_basic_diesel_error(
        error,
        NoteRepositoryError::query,
        NoteRepositoryError::connection,
    )
}

fn row_to_note(row: NoteRow, plant_ids: BTreeSet<PlantId>) -> Note {
    Note {
        id: NoteId::from_uuid(row.id),
        content: row.content,
        date: row.note_date,
        created_at: row.created_at,
        image: row.image,
        plant_ids,
    }
}

#[async_trait]
impl NoteRepository for DieselNoteRepository {
    async fn create(&self, note: &Note) -> Result<(), NoteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewNoteRow {
            id: *note.id.as_uuid(),
            content: &note.content,
            note_date: note.date,
            created_at: note.created_at,
            image: note.image.as_deref(),
        };
        let links: Vec<NotePlantRow> = note
            .plant_ids
            .iter()
            .map(|plant| NotePlantRow {
                note_id: *note.id.as_uuid(),
                plant_id: *plant.as_uuid(),
            })
            .collect();

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                diesel::insert_into(notes::table)
                    .values(&new_row)
                    .execute(conn)
                    .await?;
                if !links.is_empty() {
                    diesel::insert_into(note_plants::table)
                        .values(&links)
                        .execute(conn)
                        .await?;
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn list_for_plant(&self, plant: &PlantId) -> Result<Vec<Note>, NoteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<NoteRow> = notes::table
            .inner_join(note_plants::table)
            .filter(note_plants::plant_id.eq(plant.as_uuid()))
            .order((notes::note_date.desc(), notes::created_at.desc()))
            .select(NoteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let links: Vec<NotePlantRow> = note_plants::table
            .filter(note_plants::note_id.eq_any(ids))
            .select(NotePlantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let mut by_note: HashMap<Uuid, BTreeSet<PlantId>> = HashMap::new();
        for link in links {
            by_note
                .entry(link.note_id)
                .or_default()
                .insert(PlantId::from_uuid(link.plant_id));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let plant_ids = by_note.remove(&row.id).unwrap_or_default();
                row_to_note(row, plant_ids)
            })
            .collect())
    }
}
