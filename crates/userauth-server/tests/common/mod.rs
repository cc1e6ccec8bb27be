use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceExt;
use userauth_api_types::request::AuthRequest;
use userauth_auth::{AuthError, AuthProvider, AuthResult};
use userauth_server::ServiceConfig;

pub fn service_config() -> ServiceConfig {
    ServiceConfig {
        address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        metrics_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3001),
    }
}

/// Fails every operation the way a broken backing service would.
#[derive(Default)]
pub struct BrokenAuthProvider;

#[async_trait]
impl AuthProvider for BrokenAuthProvider {
    type Config = ();

    async fn healthcheck(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("credential store unreachable"))
    }

    async fn authenticate(&self, _request: &AuthRequest) -> AuthResult<()> {
        Err(AuthError::ServiceError(anyhow::anyhow!("credential store unreachable")))
    }
}

/// Sends a GET through the router and returns the status with the body as text.
pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), 100_000).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
