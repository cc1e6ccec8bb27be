use serde::{Deserialize, Serialize};

/// Status and body returned by `/users/`.
///
/// The body is expected to be empty (after trimming whitespace) for every outcome;
/// the status code alone carries the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub status_code: u16,
    pub body: String,
}

/// How a caller should read an [`AuthResponse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// 200: the credentials were accepted.
    Accepted,
    /// 401: the credentials were rejected.
    Rejected,
    /// Anything else, including 501 for credentials the endpoint has no verdict for.
    Unexpected(u16),
}

impl AuthResponse {
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    #[must_use]
    pub fn outcome(&self) -> AuthOutcome {
        match self.status_code {
            200 => AuthOutcome::Accepted,
            401 => AuthOutcome::Rejected,
            other => AuthOutcome::Unexpected(other),
        }
    }
}
