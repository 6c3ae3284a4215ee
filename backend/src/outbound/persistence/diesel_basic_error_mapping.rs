//! Shared Diesel error mapping for the journal repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel failures onto query/connection constructors.
///
/// Details stay in the debug log; the returned message is deliberately
/// generic so database internals never reach a response body.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            query("referenced record does not exist")
        }
        _ => query("database error"),
    }
}

/// Whether `error` is a unique-constraint violation.
pub(crate) fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::GardenRepositoryError;
    use rstest::rstest;

    fn map(error: DieselError) -> GardenRepositoryError {
        map_basic_diesel_error(
            error,
            GardenRepositoryError::query,
            GardenRepositoryError::connection,
        )
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert_eq!(
            map(DieselError::NotFound),
            GardenRepositoryError::query("record not found")
        );
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map(error),
            GardenRepositoryError::connection("database connection error")
        );
    }

    #[rstest]
    fn unique_violations_are_detected() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_owned()),
        );
        assert!(is_unique_violation(&error));
        assert!(!is_unique_violation(&DieselError::NotFound));
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_basic_pool_error(PoolError::checkout("timed out"), |message| {
            GardenRepositoryError::connection(message)
        });
        assert_eq!(mapped, GardenRepositoryError::connection("timed out"));
    }
}
