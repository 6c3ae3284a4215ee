//! Typed identifiers for journal entities.
//!
//! Every entity is keyed by a UUID v4. Wrapping each key in its own newtype
//! keeps a `PlantId` from being passed where a `GardenId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error raised when an identifier fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} id must be a valid UUID")]
pub struct IdParseError {
    kind: &'static str,
}

impl IdParseError {
    /// Entity label of the identifier that failed to parse.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an identifier from its textual form.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, IdParseError> {
                Uuid::parse_str(raw.as_ref().trim())
                    .map(Self)
                    .map_err(|_| IdParseError { kind: $kind })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

uuid_id! {
    /// Stable identifier of a registered account.
    UserId => "user"
}

uuid_id! {
    /// Identifier of a garden.
    GardenId => "garden"
}

uuid_id! {
    /// Identifier of a plant within a garden.
    PlantId => "plant"
}

uuid_id! {
    /// Identifier of a shared plant-type registry entry.
    PlantTypeId => "plant type"
}

uuid_id! {
    /// Identifier of a journal note.
    NoteId => "note"
}

uuid_id! {
    /// Identifier of a stored recommendation.
    RecommendationId => "recommendation"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    fn rejects_malformed_input(#[case] raw: &str) {
        let err = GardenId::new(raw).expect_err("malformed id");
        assert_eq!(err.kind(), "garden");
        assert_eq!(err.to_string(), "garden id must be a valid UUID");
    }

    #[rstest]
    fn trims_surrounding_whitespace() {
        let id = PlantId::new(" 3fa85f64-5717-4562-b3fc-2c963f66afa6 ").expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    fn serialises_as_bare_uuid_string() {
        let id = UserId::random();
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::Value::String(id.to_string()));
    }
}
