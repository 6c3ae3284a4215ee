//! PostgreSQL-backed `PlantRepository` implementation using Diesel ORM.
//!
//! Plants are read through a left join on `plant_types` so a plant whose
//! type was deleted comes back untyped.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlantRepository, PlantRepositoryError};
use crate::domain::{GardenId, Plant, PlantId, PlantName, PlantType, PlantTypeId, PlantTypeName};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPlantRow, PlantRow, PlantUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{plant_types, plants};

/// Diesel-backed implementation of the plant repository port.
#[derive(Clone)]
pub struct DieselPlantRepository {
    pool: DbPool,
}

impl DieselPlantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PlantRepositoryError {
    map_basic_pool_error(error, |message| PlantRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> PlantRepositoryError {
    map_basic_diesel_error(
        error,
        PlantRepositoryError::query,
        PlantRepositoryError::connection,
    )
}

fn row_to_plant(
    (row, type_name): (PlantRow, Option<String>),
) -> Result<Plant, PlantRepositoryError> {
    let PlantRow {
        id,
        garden_id,
        plant_type_id,
        name,
        planted_date,
        image,
    } = row;
    let name = PlantName::new(&name)
        .map_err(|err| PlantRepositoryError::query(format!("stored plant name: {err}")))?;
    let plant_type = match (plant_type_id, type_name) {
        (Some(type_id), Some(type_name)) => Some(PlantType {
            id: PlantTypeId::from_uuid(type_id),
            name: PlantTypeName::new(&type_name).map_err(|err| {
                PlantRepositoryError::query(format!("stored plant type name: {err}"))
            })?,
        }),
        _ => None,
    };
    Ok(Plant {
        id: PlantId::from_uuid(id),
        garden_id: GardenId::from_uuid(garden_id),
        name,
        plant_type,
        planted_date,
        image,
    })
}

#[async_trait]
impl PlantRepository for DieselPlantRepository {
    async fn create(&self, plant: &Plant) -> Result<(), PlantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPlantRow {
            id: *plant.id.as_uuid(),
            garden_id: *plant.garden_id.as_uuid(),
            plant_type_id: plant.plant_type.as_ref().map(|kind| *kind.id.as_uuid()),
            name: plant.name.as_ref(),
            planted_date: plant.planted_date,
            image: plant.image.as_deref(),
        };
        diesel::insert_into(plants::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn update(&self, plant: &Plant) -> Result<(), PlantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = PlantUpdate {
            plant_type_id: plant.plant_type.as_ref().map(|kind| *kind.id.as_uuid()),
            name: plant.name.as_ref(),
            planted_date: plant.planted_date,
            image: plant.image.as_deref(),
        };
        let updated = diesel::update(plants::table.find(plant.id.as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated == 0 {
            return Err(PlantRepositoryError::query(format!(
                "plant {} does not exist",
                plant.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &PlantId) -> Result<bool, PlantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(plants::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn find_by_id(&self, id: &PlantId) -> Result<Option<Plant>, PlantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = plants::table
            .left_join(plant_types::table)
            .filter(plants::id.eq(id.as_uuid()))
            .select((PlantRow::as_select(), plant_types::name.nullable()))
            .first::<(PlantRow, Option<String>)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_plant).transpose()
    }

    async fn list_for_garden(
        &self,
        garden: &GardenId,
    ) -> Result<Vec<Plant>, PlantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = plants::table
            .left_join(plant_types::table)
            .filter(plants::garden_id.eq(garden.as_uuid()))
            .order((plants::name.asc(), plants::id.asc()))
            .select((PlantRow::as_select(), plant_types::name.nullable()))
            .load::<(PlantRow, Option<String>)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_plant).collect()
    }
}
