use crate::ServiceState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use metrics::counter;
use std::sync::Arc;
use userauth_api_types::request::AuthRequest;
use userauth_auth::{AuthError, AuthProvider};

/// `GET /users/?username=..&password=..`
///
/// Every outcome is reported through the status code with an empty body: 200 when the
/// credentials are accepted, 401 when they are rejected.
pub async fn authenticate<A>(
    State(state): State<Arc<ServiceState<A>>>,
    query: Result<Query<AuthRequest>, QueryRejection>,
) -> Result<StatusCode, AuthError>
where
    A: AuthProvider + Sync,
{
    let Ok(Query(request)) = query else {
        counter!("userauth_authentications_total", "outcome" => "bad_request").increment(1);
        return Ok(StatusCode::BAD_REQUEST);
    };

    let res = state.auth.authenticate(&request).await;

    let outcome = match &res {
        Ok(()) => "accepted",
        Err(e) => e.metric_label(),
    };
    counter!("userauth_authentications_total", "outcome" => outcome).increment(1);

    tracing::debug!(username = %request.username, outcome, "Handled authentication request");

    res.map(|()| StatusCode::OK)
}
