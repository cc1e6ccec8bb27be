use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials submitted to `/users/` as the `username` and `password` query parameters.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

impl AuthRequest {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Query pairs in the order they are put on the wire.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
