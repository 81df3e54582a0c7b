//! SIC code endpoint tests: authentication, role checks and search dispatch.

use actix_web::{App, HttpMessage, dev::Service, test, web};
use serde_json::json;
use sic_code_lib::api::configure_sic_code_routes;
use sic_code_lib::auth::CallerIdentity;
use sic_code_lib::models::{MatchField, ReferenceItem};

use super::test_helpers::*;

const SIC_CODES_URI: &str = "/api/v1/sic-codes";

/// (1) No identity → 401 Invalid token, collaborator untouched.
#[actix_rt::test]
async fn test_missing_identity_returns_401() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) = get_json(&app, SIC_CODES_URI, None, Some("manager")).await;

    assert_eq!(status, 401);
    assert_eq!(body["err"], "Invalid token");
    assert!(service.calls().is_empty());
}

/// (2) Empty email header counts as no identity.
#[actix_rt::test]
async fn test_empty_email_returns_401() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, _) = get_json(&app, SIC_CODES_URI, Some(""), Some("manager")).await;

    assert_eq!(status, 401);
    assert!(service.calls().is_empty());
}

/// (3) Agent role → 403 with the forbidden body.
#[actix_rt::test]
async fn test_agent_role_returns_403() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) =
        get_json(&app, SIC_CODES_URI, Some("agent@example.com"), Some("agent")).await;

    assert_eq!(status, 403);
    assert_eq!(
        body,
        json!({ "err": "User Forbidden", "desc": "User not access this route" })
    );
    assert!(service.calls().is_empty());
}

/// (4) Identity without any roles → 403.
#[actix_rt::test]
async fn test_absent_roles_return_403() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, _) = get_json(&app, SIC_CODES_URI, Some("someone@example.com"), None).await;

    assert_eq!(status, 403);
}

/// (5) Manager with empty query → one call with ("", full list, fullTitle), body verbatim.
#[actix_rt::test]
async fn test_manager_receives_collaborator_result() {
    let returned = vec![
        ReferenceItem::new("62020", "Information technology consultancy activities"),
        ReferenceItem::new("01120", "Growing of rice"),
    ];
    let service = RecordingAutoComplete::new(Behaviour::Return(returned.clone()));
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) =
        get_json(&app, SIC_CODES_URI, Some("manager@example.com"), Some("manager")).await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::to_value(&returned).unwrap());

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].fragment, "");
    assert_eq!(calls[0].items, sic_codes());
    assert_eq!(calls[0].field, MatchField::FullTitle);
}

/// (6) Search fragment from the query string reaches the collaborator.
#[actix_rt::test]
async fn test_search_fragment_filters_full_title() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) = get_json(
        &app,
        "/api/v1/sic-codes?search=Software",
        Some("manager@example.com"),
        Some("agent,manager"),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!([{
            "id": "62012",
            "title": "Business and domestic software development",
            "fullTitle": "62012 - Business and domestic software development"
        }])
    );
    assert_eq!(service.calls()[0].fragment, "Software");
}

/// (7) Collaborator failure → 500 with the error message, not a propagated error.
#[actix_rt::test]
async fn test_search_failure_returns_500() {
    let service = RecordingAutoComplete::new(Behaviour::Fail("Something went wrong"));
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) =
        get_json(&app, SIC_CODES_URI, Some("manager@example.com"), Some("manager")).await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({ "err": "Something went wrong", "desc": "Could Not Get Master SIC Code" })
    );
    assert_eq!(service.calls().len(), 1);
}

/// (8) Identical requests give identical responses.
#[actix_rt::test]
async fn test_repeated_requests_are_idempotent() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;
    let uri = "/api/v1/sic-codes?search=growing";

    let first = get_json(&app, uri, Some("manager@example.com"), Some("manager")).await;
    let second = get_json(&app, uri, Some("manager@example.com"), Some("manager")).await;

    assert_eq!(first, second);
    assert_eq!(first.1.as_array().map(Vec::len), Some(2));
    assert_eq!(service.calls().len(), 2);
}

/// (9) Identity inserted by upstream middleware is used instead of headers.
#[actix_rt::test]
async fn test_upstream_identity_extension_is_honoured() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = test::init_service(
        App::new()
            .wrap_fn(|req, srv| {
                req.extensions_mut()
                    .insert(CallerIdentity::with_roles("admin@example.com", &["admin"]));
                srv.call(req)
            })
            .app_data(web::Data::new(create_controller(service.clone())))
            .service(web::scope("/api/v1").configure(configure_sic_code_routes)),
    )
    .await;

    let (status, body) = get_json(&app, "/api/v1/sic-codes?search=rice", None, None).await;

    assert_eq!(status, 200);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

/// (10) A query serde would reject must not preempt authentication.
#[actix_rt::test]
async fn test_duplicate_search_key_without_identity_returns_401() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) =
        get_json(&app, "/api/v1/sic-codes?search=a&search=b", None, None).await;

    assert_eq!(status, 401);
    assert_eq!(body["err"], "Invalid token");
    assert!(service.calls().is_empty());
}

/// (11) Same query from a forbidden role still gets the 403 body.
#[actix_rt::test]
async fn test_duplicate_search_key_with_agent_returns_403() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) = get_json(
        &app,
        "/api/v1/sic-codes?search=a&search=b",
        Some("agent@example.com"),
        Some("agent"),
    )
    .await;

    assert_eq!(status, 403);
    assert_eq!(
        body,
        json!({ "err": "User Forbidden", "desc": "User not access this route" })
    );
    assert!(service.calls().is_empty());
}

/// (12) Permitted callers get results; the first `search` value is used.
#[actix_rt::test]
async fn test_duplicate_search_key_with_manager_uses_first_value() {
    let service = RecordingAutoComplete::new(Behaviour::Filter);
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) = get_json(
        &app,
        "/api/v1/sic-codes?search=software&search=rice&page=2",
        Some("manager@example.com"),
        Some("manager"),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body[0]["id"], "62012");
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].fragment, "software");
    assert_eq!(calls[0].field, MatchField::FullTitle);
}

/// (13) Undecodable percent escapes fall through to the search as text.
#[actix_rt::test]
async fn test_malformed_query_still_reaches_search() {
    let service = RecordingAutoComplete::new(Behaviour::Return(Vec::new()));
    let app = create_test_app(create_controller(service.clone())).await;

    let (status, body) = get_json(
        &app,
        "/api/v1/sic-codes?search=%zz",
        Some("manager@example.com"),
        Some("manager"),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
    assert_eq!(service.calls().len(), 1);
}
