#![cfg_attr(docsrs, feature(doc_cfg))]

use async_trait::async_trait;
use userauth_api_types::request::AuthRequest;

#[cfg(feature = "table-backend")]
#[cfg_attr(docsrs, doc(cfg(feature = "table-backend")))]
pub mod table_backend;

pub mod no_backend;

mod error;

pub use error::*;

#[async_trait]
pub trait AuthProvider {
    type Config;

    async fn healthcheck(&self) -> anyhow::Result<()>;

    /// Check a username/password pair.
    ///
    /// `Ok(())` accepts the credentials. A rejection is [`AuthError::AuthenticationFailed`],
    /// which is an ordinary outcome and is answered with 401, not treated as a fault.
    ///
    /// Backends that hold no verdict for a pair must return [`AuthError::UnknownCredentials`]
    /// rather than guess.
    async fn authenticate(&self, request: &AuthRequest) -> AuthResult<()>;
}
