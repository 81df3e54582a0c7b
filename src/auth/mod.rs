//! Caller identity and role-based access control.
//!
//! Token validation happens upstream; this module only reads the identity
//! it produced and decides whether that identity may use a route.

mod extractor;
mod policy;

pub use extractor::CallerIdentity;
pub use policy::AccessPolicy;
