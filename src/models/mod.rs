//! Domain models for the SIC code API.

pub mod sic_code;

pub use sic_code::{MatchField, ReferenceItem, SicCodeDataset};
