//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod sic_codes;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use sic_codes::SicCodeController;
pub use sic_codes::configure_routes as configure_sic_code_routes;
