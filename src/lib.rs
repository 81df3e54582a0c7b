//! SIC code reference API library.
//!
//! Provides the role-gated SIC code lookup handler, the caller identity
//! extractor, the autocomplete collaborator contract and the ambient
//! configuration, error and logging plumbing around them.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
