//! A [`Transport`] that never touches the network.
//!
//! Replies are registered up front, either for a specific credential pair or for every
//! call. Each dispatched URL is recorded so tests can check what would have been sent.

use super::{Reply, Transport};
use crate::{Error, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Url;
use userauth_api_types::request::AuthRequest;

#[derive(Default)]
pub struct MockTransport {
    routes: Vec<(AuthRequest, Reply)>,
    fallback: Option<Reply>,
    calls: Mutex<Vec<Url>>,
}

impl MockTransport {
    /// A transport with no replies configured; every call fails with [`Error::UnexpectedCall`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with `reply`, whatever the query.
    #[must_use]
    pub fn returning(reply: Reply) -> Self {
        Self {
            fallback: Some(reply),
            ..Self::default()
        }
    }

    /// Answer calls carrying exactly these credentials with `reply`.
    ///
    /// Takes precedence over the catch-all reply.
    #[must_use]
    pub fn reply_to(mut self, request: AuthRequest, reply: Reply) -> Self {
        self.routes.push((request, reply));
        self
    }

    /// URLs dispatched so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn find_reply(&self, url: &Url) -> Option<&Reply> {
        let credentials = credentials_from_query(url);

        self.routes
            .iter()
            .find(|(request, _)| credentials.as_ref() == Some(request))
            .map(|(_, reply)| reply)
            .or(self.fallback.as_ref())
    }
}

fn credentials_from_query(url: &Url) -> Option<AuthRequest> {
    let mut username = None;
    let mut password = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "username" => username = Some(value.into_owned()),
            "password" => password = Some(value.into_owned()),
            _ => {},
        }
    }

    Some(AuthRequest::new(username?, password?))
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: Url) -> Result<Reply> {
        self.calls.lock().push(url.clone());

        match self.find_reply(&url) {
            Some(reply) => Ok(reply.clone()),
            None => Err(Error::UnexpectedCall(url)),
        }
    }
}
