//! SIC industry code reference records.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// A static lookup record, here a SIC industry code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    /// SIC code, e.g. "01110"
    pub id: String,
    /// Human-readable industry title
    pub title: String,
    /// "{id} - {title}", the field autocomplete matches against
    pub full_title: String,
}

impl ReferenceItem {
    /// Create an item, deriving `full_title` from the code and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        let title = title.into();
        let full_title = format!("{} - {}", id, title);
        Self {
            id,
            title,
            full_title,
        }
    }
}

/// Attribute of a [`ReferenceItem`] that a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Id,
    Title,
    FullTitle,
}

impl MatchField {
    /// Wire name of the attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::FullTitle => "fullTitle",
        }
    }

    /// Value of this attribute on the given item.
    pub fn value_of<'a>(&self, item: &'a ReferenceItem) -> &'a str {
        match self {
            Self::Id => &item.id,
            Self::Title => &item.title,
            Self::FullTitle => &item.full_title,
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The full SIC code list, shared read-only across workers.
#[derive(Debug, Clone, Default)]
pub struct SicCodeDataset(Arc<[ReferenceItem]>);

impl SicCodeDataset {
    pub fn new(items: Vec<ReferenceItem>) -> Self {
        Self(items.into())
    }

    pub fn items(&self) -> &[ReferenceItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ReferenceItem> for SicCodeDataset {
    fn from_iter<T: IntoIterator<Item = ReferenceItem>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
