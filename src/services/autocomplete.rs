//! Contract for the autocomplete collaborator.
//!
//! Handlers own the reference list and hand it over in full on every call;
//! implementations filter it by a text fragment against one attribute.

use async_trait::async_trait;

use crate::models::{MatchField, ReferenceItem};

/// Failure reported by an autocomplete search.
///
/// The message is surfaced verbatim to API callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SearchError {
    message: String,
}

impl SearchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Search over a reference list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AutoCompleteService: Send + Sync {
    /// Return the items whose `field` matches `fragment`.
    ///
    /// The returned order is the implementation's choice and is passed to
    /// callers unchanged.
    async fn search(
        &self,
        fragment: &str,
        items: &[ReferenceItem],
        field: MatchField,
    ) -> Result<Vec<ReferenceItem>, SearchError>;
}
