//! The seam between [`Client`](crate::Client) and the network.

use crate::Result;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

pub mod mock;

/// Status and body of one HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, String::new())
    }
}

#[async_trait]
pub trait Transport {
    /// Dispatch a GET request.
    ///
    /// Any status the server answers with, error statuses included, is a `Reply`.
    async fn get(&self, url: Url) -> Result<Reply>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::from_reqwest(reqwest::Client::new())
    }

    #[must_use]
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { http: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<Reply> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        Ok(Reply { status, body })
    }
}
