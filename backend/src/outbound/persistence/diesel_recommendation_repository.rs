//! PostgreSQL-backed `RecommendationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecommendationRepository, RecommendationRepositoryError};
use crate::domain::{PlantId, Recommendation, RecommendationId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::RecommendationRow;
use super::pool::{DbPool, PoolError};
use super::schema::ai_recommendations;

/// Diesel-backed implementation of the recommendation repository port.
#[derive(Clone)]
pub struct DieselRecommendationRepository {
    pool: DbPool,
}

impl DieselRecommendationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecommendationRepositoryError {
    map_basic_pool_error(error, |message| {
        RecommendationRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> RecommendationRepositoryError {
    map_basic_diesel_error(
        error,
        RecommendationRepositoryError::query,
        RecommendationRepositoryError::connection,
    )
}

impl From<RecommendationRow> for Recommendation {
    fn from(row: RecommendationRow) -> Self {
        Self {
            id: RecommendationId::from_uuid(row.id),
            plant_id: PlantId::from_uuid(row.plant_id),
            text: row.recommendation,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RecommendationRepository for DieselRecommendationRepository {
    async fn create(
        &self,
        recommendation: &Recommendation,
    ) -> Result<(), RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = RecommendationRow {
            id: *recommendation.id.as_uuid(),
            plant_id: *recommendation.plant_id.as_uuid(),
            recommendation: recommendation.text.clone(),
            created_at: recommendation.created_at,
        };
        diesel::insert_into(ai_recommendations::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn latest_for_plant(
        &self,
        plant: &PlantId,
    ) -> Result<Option<Recommendation>, RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = ai_recommendations::table
            .filter(ai_recommendations::plant_id.eq(plant.as_uuid()))
            .order((
                ai_recommendations::created_at.desc(),
                ai_recommendations::id.desc(),
            ))
            .select(RecommendationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Recommendation::from))
    }

    async fn list_for_plant(
        &self,
        plant: &PlantId,
    ) -> Result<Vec<Recommendation>, RecommendationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<RecommendationRow> = ai_recommendations::table
            .filter(ai_recommendations::plant_id.eq(plant.as_uuid()))
            .order((
                ai_recommendations::created_at.desc(),
                ai_recommendations::id.desc(),
            ))
            .select(RecommendationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Recommendation::from).collect())
    }
}
