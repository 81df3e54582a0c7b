//! Actix-web extractor for the caller identity resolved upstream.
//!
//! The authentication layer in front of this service either inserts a
//! [`CallerIdentity`] into the request extensions or forwards the caller as
//! trusted gateway headers. Missing identity is not an error here; handlers
//! decide how to treat an empty email.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use std::future::{Ready, ready};

use crate::config::{USER_EMAIL_HEADER, USER_ROLES_HEADER, parse_role_list};

/// Identity of the caller for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Email resolved by the authentication layer, empty when unresolved.
    pub email: String,
    /// Roles in the order the authentication layer produced them.
    pub roles: Option<Vec<String>>,
}

impl CallerIdentity {
    pub fn new(email: impl Into<String>, roles: Option<Vec<String>>) -> Self {
        Self {
            email: email.into(),
            roles,
        }
    }

    /// Identity with an email and the given roles.
    pub fn with_roles(email: impl Into<String>, roles: &[&str]) -> Self {
        Self::new(email, Some(roles.iter().map(|r| r.to_string()).collect()))
    }

    /// True when an identity was resolved upstream.
    pub fn is_authenticated(&self) -> bool {
        !self.email.is_empty()
    }

    /// Roles as a slice, empty when the roles were absent.
    pub fn roles(&self) -> &[String] {
        self.roles.as_deref().unwrap_or_default()
    }

    fn from_headers(req: &HttpRequest) -> Self {
        Self {
            email: header_value(req, USER_EMAIL_HEADER)
                .unwrap_or_default()
                .to_string(),
            roles: header_value(req, USER_ROLES_HEADER).map(parse_role_list),
        }
    }
}

/// Trimmed header value, `None` if missing or not valid UTF-8.
fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

impl FromRequest for CallerIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Identity inserted by upstream middleware wins over gateway headers
        let identity = req
            .extensions()
            .get::<CallerIdentity>()
            .cloned()
            .unwrap_or_else(|| Self::from_headers(req));

        ready(Ok(identity))
    }
}
