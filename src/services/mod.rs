//! Collaborator services used by the API handlers.

pub mod autocomplete;

pub use autocomplete::{AutoCompleteService, SearchError};
