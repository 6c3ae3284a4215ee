//! Recommendation source adapters.

mod placeholder;

pub use placeholder::PlaceholderAdvisor;
