//! PostgreSQL-backed `PlantTypeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{PlantTypeRepository, PlantTypeRepositoryError};
use crate::domain::{PlantType, PlantTypeId, PlantTypeName};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::PlantTypeRow;
use super::pool::{DbPool, PoolError};
use super::schema::plant_types;

/// Diesel-backed implementation of the plant type repository port.
#[derive(Clone)]
pub struct DieselPlantTypeRepository {
    pool: DbPool,
}

impl DieselPlantTypeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlantTypeRepositoryError {
    map_basic_pool_error(error, |message| {
        PlantTypeRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> PlantTypeRepositoryError {
    map_basic_diesel_error(
        error,
        PlantTypeRepositoryError::query,
        PlantTypeRepositoryError::connection,
    )
}

fn row_to_plant_type(row: PlantTypeRow) -> Result<PlantType, PlantTypeRepositoryError> {
    let name = PlantTypeName::new(&row.name)
        .map_err(|err| PlantTypeRepositoryError::query(format!("stored plant type: {err}")))?;
    Ok(PlantType {
        id: PlantTypeId::from_uuid(row.id),
        name,
    })
}

#[async_trait]
impl PlantTypeRepository for DieselPlantTypeRepository {
    /// Insert-if-absent keyed on the unique name, then read back the winner.
    ///
    /// Concurrent callers racing on one name all observe the same row.
    async fn get_or_create(
        &self,
        candidate: &PlantType,
    ) -> Result<PlantType, PlantTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = PlantTypeRow {
            id: *candidate.id.as_uuid(),
            name: candidate.name.as_ref().to_owned(),
        };
        let inserted = diesel::insert_into(plant_types::table)
            .values(&row)
            .on_conflict(plant_types::name)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(name = %candidate.name, inserted, "plant type get-or-create");

        let stored: PlantTypeRow = plant_types::table
            .filter(plant_types::name.eq(candidate.name.as_ref()))
            .select(PlantTypeRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_plant_type(stored)
    }

    async fn find_by_id(
        &self,
        id: &PlantTypeId,
    ) -> Result<Option<PlantType>, PlantTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = plant_types::table
            .find(id.as_uuid())
            .select(PlantTypeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_plant_type).transpose()
    }

    async fn list_all(&self) -> Result<Vec<PlantType>, PlantTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PlantTypeRow> = plant_types::table
            .order(plant_types::name.asc())
            .select(PlantTypeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_plant_type).collect()
    }

    async fn delete(&self, id: &PlantTypeId) -> Result<bool, PlantTypeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(plant_types::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
