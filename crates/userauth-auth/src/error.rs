use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("The credentials supplied were rejected")]
    AuthenticationFailed,
    #[error("No verdict is known for the credentials supplied")]
    UnknownCredentials,
    #[error("This operation is not implemented")]
    Unimplemented,
    #[error("Internal error ({})", error_id(_0))]
    ServiceError(#[from] anyhow::Error),
}

impl AuthError {
    /// Label used for the `outcome` dimension of auth metrics.
    #[must_use]
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "rejected",
            Self::UnknownCredentials => "unknown",
            Self::Unimplemented => "unimplemented",
            Self::ServiceError(_) => "service_error",
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            Self::UnknownCredentials => StatusCode::NOT_IMPLEMENTED,
            Self::Unimplemented => StatusCode::NOT_IMPLEMENTED,
            Self::ServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every outcome of `/users/` is signalled by the status alone, so the body stays empty.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::ServiceError(error) = &self {
            tracing::error!(?error, id = %error_id(error), "Encountered service error in auth operation");
        }
        self.status_code().into_response()
    }
}

/// We can't disclose the actual message, it could contain private info or attacker-injected strings.
/// But it is useful to differentiate between different types of internal errors.
fn error_id(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    format!("{:.6x}", Sha256::digest(msg.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_unauthorized() {
        assert_eq!(AuthError::AuthenticationFailed.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unknown_credentials_are_not_guessed() {
        assert_eq!(AuthError::UnknownCredentials.status_code(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn service_error_message_hides_cause() {
        let err = AuthError::from(anyhow::anyhow!("db password is hunter2"));
        let msg = err.to_string();

        assert!(msg.starts_with("Internal error ("));
        assert!(!msg.contains("hunter2"));
    }
}
