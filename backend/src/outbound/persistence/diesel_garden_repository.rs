//! PostgreSQL-backed `GardenRepository` implementation using Diesel ORM.
//!
//! A garden row and its `garden_members` rows are always written in one
//! transaction. Deleting a garden relies on the foreign keys to cascade to
//! plants, their recommendations and note links.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{GardenRepository, GardenRepositoryError};
use crate::domain::{Garden, GardenId, GardenName, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{GardenMemberRow, GardenRow, GardenUpdate, NewGardenRow};
use super::pool::{DbPool, PoolError};
use super::schema::{garden_members, gardens};

/// Diesel-backed implementation of the garden repository port.
#[derive(Clone)]
pub struct DieselGardenRepository {
    pool: DbPool,
}

impl DieselGardenRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> GardenRepositoryError {
    map_basic_pool_error(error, |message| GardenRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> GardenRepositoryError {
    map_basic_diesel_error(
        error,
        GardenRepositoryError::query,
        GardenRepositoryError::connection,
    )
}

fn member_rows(garden: &Garden) -> Vec<GardenMemberRow> {
    garden
        .shared_user_ids
        .iter()
        .map(|user| GardenMemberRow {
            garden_id: *garden.id.as_uuid(),
            user_id: *user.as_uuid(),
        })
        .collect()
}

fn row_to_garden(
    row: GardenRow,
    members: BTreeSet<UserId>,
) -> Result<Garden, GardenRepositoryError> {
    let GardenRow {
        id,
        owner_id,
        name,
        description,
        image,
    } = row;
    let name = GardenName::new(&name)
        .map_err(|err| GardenRepositoryError::query(format!("stored garden name: {err}")))?;
    Ok(Garden {
        id: GardenId::from_uuid(id),
        owner_id: UserId::from_uuid(owner_id),
        name,
        description,
        image,
        shared_user_ids: members,
    })
}

/// Attach sharing sets to loaded garden rows, preserving row order.
async fn hydrate(
    conn: &mut AsyncPgConnection,
    rows: Vec<GardenRow>,
) -> Result<Vec<Garden>, GardenRepositoryError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let members: Vec<GardenMemberRow> = garden_members::table
        .filter(garden_members::garden_id.eq_any(ids))
        .select(GardenMemberRow::as_select())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let mut by_garden: HashMap<Uuid, BTreeSet<UserId>> = HashMap::new();
    for member in members {
        by_garden
            .entry(member.garden_id)
            .or_default()
            .insert(UserId::from_uuid(member.user_id));
    }

    rows.into_iter()
        .map(|row| {
            let members = by_garden.remove(&row.id).unwrap_or_default();
            row_to_garden(row, members)
        })
        .collect()
}

#[async_trait]
impl GardenRepository for DieselGardenRepository {
    async fn create(&self, garden: &Garden) -> Result<(), GardenRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewGardenRow {
            id: *garden.id.as_uuid(),
            owner_id: *garden.owner_id.as_uuid(),
            name: garden.name.as_ref(),
            description: garden.description.as_deref(),
            image: garden.image.as_deref(),
        };
        let members = member_rows(garden);

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                diesel::insert_into(gardens::table)
                    .values(&new_row)
                    .execute(conn)
                    .await?;
                if !members.is_empty() {
                    diesel::insert_into(garden_members::table)
                        .values(&members)
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

    async fn update(&self, garden: &Garden) -> Result<(), GardenRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let garden_id = *garden.id.as_uuid();
        let changes = GardenUpdate {
            name: garden.name.as_ref(),
            description: garden.description.as_deref(),
            image: garden.image.as_deref(),
        };
        let members = member_rows(garden);

        let updated = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let updated = diesel::update(gardens::table.find(garden_id))
                        .set(&changes)
                        .execute(conn)
                        .await?;
                    if updated == 0 {
                        return Ok(0);
                    }
                    diesel::delete(
                        garden_members::table.filter(garden_members::garden_id.eq(garden_id)),
                    )
                    .execute(conn)
                    .await?;
                    if !members.is_empty() {
                        diesel::insert_into(garden_members::table)
                            .values(&members)
                            .execute(conn)
                            .await?;
                    }
                    Ok(updated)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(GardenRepositoryError::query(format!(
                "garden {} does not exist",
                garden.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &GardenId) -> Result<bool, GardenRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(gardens::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn find_by_id(&self, id: &GardenId) -> Result<Option<Garden>, GardenRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = gardens::table
            .find(id.as_uuid())
            .select(GardenRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(hydrate(&mut conn, vec![row]).await?.into_iter().next())
    }

    async fn list_owned_by(&self, user: &UserId) -> Result<Vec<Garden>, GardenRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<GardenRow> = gardens::table
            .filter(gardens::owner_id.eq(user.as_uuid()))
            .order((gardens::name.asc(), gardens::id.asc()))
            .select(GardenRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        hydrate(&mut conn, rows).await
    }

    async fn list_shared_with(
        &self,
        user: &UserId,
    ) -> Result<Vec<Garden>, GardenRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<GardenRow> = gardens::table
            .inner_join(garden_members::table)
            .filter(garden_members::user_id.eq(user.as_uuid()))
            .order((gardens::name.asc(), gardens::id.asc()))
            .select(GardenRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        hydrate(&mut conn, rows).await
    }
}
