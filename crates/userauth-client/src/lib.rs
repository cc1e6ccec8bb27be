use anyhow::Context;
use reqwest::Url;
use thiserror::Error;
use userauth_api_types::request::AuthRequest;
use userauth_api_types::response::AuthResponse;
use userauth_api_types::USERS_PATH;

pub mod transport;

pub use transport::mock::MockTransport;
pub use transport::{Reply, ReqwestTransport, Transport};

/// Where a locally started server listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Endpoint is not a usable URL")]
    InvalidEndpoint(#[source] anyhow::Error),
    #[error("Failed to reach the userauth server")]
    Transport(#[from] reqwest::Error),
    #[error("No reply was configured for a call to {0}")]
    UnexpectedCall(Url),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct Client<T = ReqwestTransport> {
    transport: T,
    users_url: Url,
}

impl Client {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_transport(endpoint, ReqwestTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(endpoint: &str, transport: T) -> Result<Self> {
        let mut users_url = Url::parse(endpoint)
            .with_context(|| format!("'{endpoint}' is not a URL"))
            .map_err(Error::InvalidEndpoint)?;

        // credentials are appended as the query, so the endpoint must not carry one
        if users_url.query().is_some() || users_url.fragment().is_some() {
            return Err(Error::InvalidEndpoint(anyhow::anyhow!(
                "'{endpoint}' must not have a query or fragment"
            )));
        }

        users_url
            .path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(anyhow::anyhow!("'{endpoint}' is not a hierarchical URL"))
            })?
            .pop_if_empty()
            .extend(USERS_PATH.trim_start_matches('/').split('/'));

        Ok(Self {
            transport,
            users_url,
        })
    }

    /// Submit credentials to `/users/`.
    ///
    /// A rejection is still `Ok`: check [`AuthResponse::outcome`]. `Err` means no
    /// response was obtained at all.
    pub async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse> {
        let mut url = self.users_url.clone();

        url.query_pairs_mut().extend_pairs(request.query_pairs());

        let reply = self.transport.get(url).await?;

        tracing::debug!(
            username = %request.username,
            status = %reply.status,
            "Authentication request completed"
        );

        Ok(AuthResponse::new(reply.status.as_u16(), reply.body))
    }

    #[must_use]
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
