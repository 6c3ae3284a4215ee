//! Garden journal: multi-user gardening notes over actix-web and Diesel.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, rules and
//! services; [`inbound`] turns HTTP requests into port calls; [`outbound`]
//! implements storage, hashing and the recommendation source.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
