//! SIC code lookup handler.
//!
//! Authorises the caller, hands the full SIC code list to the autocomplete
//! collaborator and shapes the outcome into a JSON response.

use actix_web::{HttpRequest, HttpResponse, get, web};
use std::sync::Arc;
use tracing::{debug, error, warn};
use utoipa::IntoParams;

use crate::auth::{AccessPolicy, CallerIdentity};
use crate::error::{AuthError, ErrorBody};
use crate::models::{MatchField, ReferenceItem, SicCodeDataset};
use crate::services::AutoCompleteService;

/// `err` field of the forbidden response.
pub const FORBIDDEN_ERR: &str = "User Forbidden";

/// `desc` field of the forbidden response.
pub const FORBIDDEN_DESC: &str = "User not access this route";

/// `desc` field of the search failure response.
pub const SEARCH_FAILED_DESC: &str = "Could Not Get Master SIC Code";

/// Query parameters for the SIC code endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SicCodeQuery {
    /// Free-text fragment to match against the full title (default empty).
    pub search: String,
}

impl SicCodeQuery {
    /// Read the query string without ever rejecting it.
    ///
    /// The first `search` pair wins and unknown keys are ignored. A query
    /// that cannot be decoded at all yields an empty fragment.
    pub fn parse(raw: &str) -> Self {
        let search = web::Query::<Vec<(String, String)>>::from_query(raw)
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find_map(|(key, value)| (key == "search").then_some(value))
            })
            .unwrap_or_default();

        Self { search }
    }
}

/// Controller for the SIC code list.
///
/// Holds no per-request state; one instance is shared by every worker.
pub struct SicCodeController {
    policy: AccessPolicy,
    service: Arc<dyn AutoCompleteService>,
    dataset: SicCodeDataset,
}

impl SicCodeController {
    pub fn new(
        policy: AccessPolicy,
        service: Arc<dyn AutoCompleteService>,
        dataset: SicCodeDataset,
    ) -> Self {
        if dataset.is_empty() {
            warn!(target: "api", "SIC code dataset is empty, every search will return nothing");
        }

        Self {
            policy,
            service,
            dataset,
        }
    }

    /// Authorise the caller and return the matching SIC codes.
    ///
    /// Only a missing identity is returned as `Err`. A forbidden caller gets
    /// a 403 response and a failing search gets a 500 response, both as `Ok`.
    /// The raw query string is only read once the caller is authorised.
    pub async fn get(
        &self,
        caller: &CallerIdentity,
        raw_query: &str,
    ) -> Result<HttpResponse, AuthError> {
        if !caller.is_authenticated() {
            debug!(target: "api", "SIC code request without resolved identity");
            return Err(AuthError::InvalidToken);
        }

        if !self.policy.is_permitted(caller.roles()) {
            warn!(
                target: "api",
                roles = ?caller.roles(),
                "SIC code access forbidden"
            );
            return Ok(
                HttpResponse::Forbidden().json(ErrorBody::new(FORBIDDEN_ERR, FORBIDDEN_DESC))
            );
        }

        let query = SicCodeQuery::parse(raw_query);
        match self
            .service
            .search(&query.search, self.dataset.items(), MatchField::FullTitle)
            .await
        {
            Ok(items) => {
                debug!(
                    target: "api",
                    fragment = %query.search,
                    dataset_size = self.dataset.len(),
                    matches = items.len(),
                    "SIC code search complete"
                );
                Ok(HttpResponse::Ok().json(items))
            }
            Err(e) => {
                error!(
                    target: "api",
                    fragment = %query.search,
                    error = %e,
                    "SIC code search failed"
                );
                Ok(HttpResponse::InternalServerError()
                    .json(ErrorBody::new(e.to_string(), SEARCH_FAILED_DESC)))
            }
        }
    }
}

/// List SIC codes matching a text fragment.
///
/// GET /api/v1/sic-codes?search=...
/// Authorization: identity forwarded by the authentication gateway
#[utoipa::path(
    get,
    path = "/api/v1/sic-codes",
    tag = "SIC Codes",
    params(SicCodeQuery),
    responses(
        (status = 200, description = "Matching SIC codes", body = Vec<ReferenceItem>),
        (status = 401, description = "No identity resolved", body = ErrorBody),
        (status = 403, description = "Caller role not permitted", body = ErrorBody),
        (status = 500, description = "Search failed", body = ErrorBody)
    ),
    security(
        ("user_email" = []),
        ("user_roles" = [])
    )
)]
#[get("/sic-codes")]
pub async fn list_sic_codes(
    req: HttpRequest,
    caller: CallerIdentity,
    controller: web::Data<SicCodeController>,
) -> Result<HttpResponse, AuthError> {
    controller.get(&caller, req.query_string()).await
}

/// Configure SIC code routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_sic_codes);
}
