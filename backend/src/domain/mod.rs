//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed journal entities, their validation and the
//! access rules that every use case shares. Inbound adapters reach the domain
//! through the driving ports in [`ports`]; outbound adapters implement its
//! driven ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - Garden, Plant, PlantType, Note, Recommendation: journal aggregates.
//! - GardenAccess: permissions of one user on one garden.
//! - FieldErrors: per-field validation messages.
//! - *Service: implementations of the driving ports.

pub mod access;
pub mod account_service;
pub mod auth;
pub mod error;
pub mod garden;
pub mod garden_service;
pub mod ids;
pub mod journal_service;
pub mod note;
pub mod plant;
pub mod plant_service;
pub mod plant_type;
pub mod plant_type_service;
pub mod ports;
pub mod recommendation;
mod service_support;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::access::GardenAccess;
pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, PASSWORD_MIN_LEN, Registration, RegistrationInput,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::garden::{
    GARDEN_NAME_MAX, Garden, GardenDraft, GardenInput, GardenName, GardenValidationError,
};
pub use self::garden_service::GardenService;
pub use self::ids::{GardenId, IdParseError, NoteId, PlantId, PlantTypeId, RecommendationId, UserId};
pub use self::journal_service::JournalService;
pub use self::note::{Note, NoteDraft, NoteInput};
pub use self::plant::{
    PLANT_NAME_MAX, Plant, PlantDraft, PlantInput, PlantName, PlantValidationError,
};
pub use self::plant_service::PlantService;
pub use self::plant_type::{
    PLANT_TYPE_NAME_MAX, PlantType, PlantTypeName, PlantTypeValidationError,
};
pub use self::plant_type_service::PlantTypeService;
pub use self::recommendation::{Recommendation, placeholder_recommendation};
pub use self::trace_id::TraceId;
pub use self::user::{Email, User, UserAccount, UserValidationError, Username};
pub use self::validation::{FieldErrors, NON_FIELD_ERRORS};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use garden_journal::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
