use axum::extract::{MatchedPath, Request, State};
use axum::http::StatusCode;
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use metrics::{counter, histogram};
use serde::Deserialize;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::StatusInRangeAsFailures;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use userauth_api_types::USERS_PATH;
use userauth_auth::AuthProvider;

pub mod users;

/// Statuses the trace layer reports as failures. A 401 is an ordinary rejection.
const FAILURE_STATUSES: RangeInclusive<u16> = 500..=599;

#[derive(Clone, Deserialize)]
pub struct ServiceConfig {
    pub address: SocketAddr,
    pub metrics_address: SocketAddr,
}

pub struct ServiceState<A> {
    pub config: ServiceConfig,
    pub auth: A,
}

impl<A> ServiceState<A> {
    #[must_use]
    pub fn new(config: ServiceConfig, auth: A) -> Self {
        Self { config, auth }
    }
}

pub fn router<A>(config: ServiceConfig, auth_client: A) -> Router
where
    A: AuthProvider + Send + Sync + 'static,
{
    let state = Arc::new(ServiceState::new(config, auth_client));

    Router::new()
        .route(USERS_PATH, get(users::authenticate))
        .route("/healthcheck", get(healthcheck))
        .with_state(state)
        .fallback(handle_global_fallback)
        .layer(CatchPanicLayer::custom(|_| {
            counter!("panics_total").increment(1);

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }))
        .layer(
            TraceLayer::new(StatusInRangeAsFailures::new(FAILURE_STATUSES).into_make_classifier())
                .make_span_with(|request: &Request| {
                    let method = request.method();
                    // the query string carries the password
                    let path = request.uri().path();

                    tracing::info_span!("http-request", ?method, path)
                })
                .on_failure(DefaultOnFailure::new()),
        )
        .layer(from_fn(metrics_layer))
}

async fn metrics_layer(request: Request, next: Next) -> Response {
    let timer = Instant::now();

    let path = endpoint_label(request.extensions().get::<MatchedPath>().map(MatchedPath::as_str))
        .to_string();

    let response = next.run(request).await;

    let elapsed = timer.elapsed();

    let code = response.status().as_u16().to_string();

    histogram!("request_duration_seconds", "code" => code, "endpoint" => path).record(elapsed);

    response
}

/// Unmatched requests share one label so arbitrary paths can't mint new series.
fn endpoint_label(matched_path: Option<&str>) -> &str {
    matched_path.unwrap_or("fallback")
}

async fn healthcheck<A>(State(state): State<Arc<ServiceState<A>>>) -> axum::response::Result<String>
where
    A: AuthProvider + Sync,
{
    let check_time = Duration::from_secs(4);

    // healthcheck is unauthenticated and shouldn't leak internals via errors
    match timeout(check_time, state.auth.healthcheck()).await {
        Ok(Ok(())) => Ok("OK".into()),
        Ok(Err(e)) => {
            for e in e.chain() {
                tracing::error!("auth healthcheck: {e}");
            }
            Err((StatusCode::INTERNAL_SERVER_ERROR, "auth failed").into())
        },
        Err(_) => Err((StatusCode::INTERNAL_SERVER_ERROR, "auth timed out").into()),
    }
}

pub async fn handle_global_fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}
