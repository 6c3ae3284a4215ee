//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use crate::domain::{Error, IdParseError};

/// Parse an identifier taken from the URL path.
///
/// A malformed id cannot name an existing record, so it is reported as
/// `not_found` rather than as a validation failure.
///
/// # Examples
/// ```
/// use garden_journal::domain::{ErrorCode, GardenId};
/// use garden_journal::inbound::http::validation::parse_path_id;
///
/// let err = parse_path_id::<GardenId>("compost").expect_err("not a uuid");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
pub fn parse_path_id<T>(raw: &str) -> Result<T, Error>
where
    T: FromStr<Err = IdParseError>,
{
    raw.parse::<T>()
        .map_err(|err| Error::not_found(format!("{} {raw} not found", err.kind())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, PlantId};
    use rstest::rstest;

    #[rstest]
    fn valid_ids_parse() {
        let id = PlantId::random();
        let parsed: PlantId = parse_path_id(&id.to_string()).expect("valid id");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn malformed_ids_are_not_found() {
        let err = parse_path_id::<PlantId>("42").expect_err("malformed");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "plant 42 not found");
    }
}
