//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions back into domain types
//! revalidate stored values, so a row edited outside the application
//! surfaces as a query error rather than an invalid aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    ai_recommendations, garden_members, gardens, note_plants, notes, plant_types, plants, users,
};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Gardens and sharing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = gardens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GardenRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = gardens)]
pub(crate) struct NewGardenRow<'a> {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
}

/// Changeset for the editable garden columns. `None` clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = gardens)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct GardenUpdate<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Insertable, Queryable, Selectable)]
#[diesel(table_name = garden_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GardenMemberRow {
    pub garden_id: Uuid,
    pub user_id: Uuid,
}

// ---------------------------------------------------------------------------
// Plants and types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = plant_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlantTypeRow {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = plants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlantRow {
    pub id: Uuid,
    pub garden_id: Uuid,
    pub plant_type_id: Option<Uuid>,
    pub name: String,
    pub planted_date: Option<NaiveDate>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = plants)]
pub(crate) struct NewPlantRow<'a> {
    pub id: Uuid,
    pub garden_id: Uuid,
    pub plant_type_id: Option<Uuid>,
    pub name: &'a str,
    pub planted_date: Option<NaiveDate>,
    pub image: Option<&'a str>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = plants)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PlantUpdate<'a> {
    pub plant_type_id: Option<Uuid>,
    pub name: &'a str,
    pub planted_date: Option<NaiveDate>,
    pub image: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NoteRow {
    pub id: Uuid,
    pub content: String,
    pub note_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notes)]
pub(crate) struct NewNoteRow<'a> {
    pub id: Uuid,
    pub content: &'a str,
    pub note_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub image: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Insertable, Queryable, Selectable)]
#[diesel(table_name = note_plants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NotePlantRow {
    pub note_id: Uuid,
    pub plant_id: Uuid,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = ai_recommendations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecommendationRow {
    pub id: Uuid,
    pub plant_id: Uuid,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}
