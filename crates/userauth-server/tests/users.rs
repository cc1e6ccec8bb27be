pub mod common;

use crate::common::{get, service_config, BrokenAuthProvider};
use axum::http::StatusCode;
use userauth_auth::no_backend::NoAuthProvider;
use userauth_auth::table_backend::{Config, TableAuthProvider};
use userauth_server::router;

fn table_router() -> axum::Router {
    router(service_config(), TableAuthProvider::new(Config::default()).unwrap())
}

#[tokio::test]
async fn authentication_failed() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, body) = get(table_router(), "/users/?username=admin&password=admin").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.trim(), "");
}

#[tokio::test]
async fn authentication_success() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, body) = get(table_router(), "/users/?username=admin&password=qwerty").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.trim(), "");
}

#[tokio::test]
async fn repeated_requests_agree() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let router = table_router();

    for _ in 0..3 {
        let (status, _) = get(router.clone(), "/users/?username=admin&password=admin").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = get(router.clone(), "/users/?username=admin&password=qwerty").await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn unknown_credentials_are_flagged() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, body) = get(table_router(), "/users/?username=guest&password=qwerty").await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body, "");
}

#[tokio::test]
async fn missing_password_is_bad_request() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, body) = get(table_router(), "/users/?username=admin").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "");

    let (status, _) = get(table_router(), "/users/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn service_error_hides_details() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, body) = get(
        router(service_config(), BrokenAuthProvider),
        "/users/?username=admin&password=qwerty",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "");
}

#[tokio::test]
async fn no_backend_is_unimplemented() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, _) = get(
        router(service_config(), NoAuthProvider),
        "/users/?username=admin&password=qwerty",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, _) = get(table_router(), "/accounts/?username=admin&password=qwerty").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthcheck_reports_backend_state() {
    let _ = tracing_subscriber::fmt::fmt().with_test_writer().try_init();

    let (status, body) = get(table_router(), "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = get(router(service_config(), BrokenAuthProvider), "/healthcheck").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "auth failed");
}
