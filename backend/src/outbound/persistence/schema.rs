//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Registered accounts. `username` is unique and case-sensitive.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        email -> Varchar,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    gardens (id) {
        id -> Uuid,
        owner_id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
        image -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Sharing set: one row per (garden, non-owner user) grant.
    garden_members (garden_id, user_id) {
        garden_id -> Uuid,
        user_id -> Uuid,
    }
}

diesel::table! {
    plant_types (id) {
        id -> Uuid,
        name -> Varchar,
    }
}

diesel::table! {
    plants (id) {
        id -> Uuid,
        garden_id -> Uuid,
        plant_type_id -> Nullable<Uuid>,
        name -> Varchar,
        planted_date -> Nullable<Date>,
        image -> Nullable<Text>,
    }
}

diesel::table! {
    notes (id) {
        id -> Uuid,
        content -> Text,
        note_date -> Date,
        created_at -> Timestamptz,
        image -> Nullable<Text>,
    }
}

diesel::table! {
    note_plants (note_id, plant_id) {
        note_id -> Uuid,
        plant_id -> Uuid,
    }
}

diesel::table! {
    ai_recommendations (id) {
        id -> Uuid,
        plant_id -> Uuid,
        recommendation -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(gardens -> users (owner_id));
diesel::joinable!(garden_members -> gardens (garden_id));
diesel::joinable!(garden_members -> users (user_id));
diesel::joinable!(plants -> gardens (garden_id));
diesel::joinable!(plants -> plant_types (plant_type_id));
diesel::joinable!(note_plants -> notes (note_id));
diesel::joinable!(note_plants -> plants (plant_id));
diesel::joinable!(ai_recommendations -> plants (plant_id));

diesel::allow_tables_to_appear_in_same_query!(
    ai_recommendations,
    garden_members,
    gardens,
    note_plants,
    notes,
    plant_types,
    plants,
    users,
);
