//! Useless (but safe) placeholder for a backend
use crate::{AuthError, AuthProvider, AuthResult};
use async_trait::async_trait;
use userauth_api_types::request::AuthRequest;

pub struct NoAuthProvider;

fn nope<T>() -> AuthResult<T> {
    Err(AuthError::Unimplemented)
}

impl NoAuthProvider {
    pub fn new(_no_config: ()) -> AuthResult<Self> {
        nope()
    }
}

/// Used as fallback to avoid compile error when no backend is configured
#[async_trait]
impl AuthProvider for NoAuthProvider {
    type Config = ();

    async fn healthcheck(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn authenticate(&self, _request: &AuthRequest) -> AuthResult<()> {
        nope()
    }
}
