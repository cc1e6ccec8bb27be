//! A backend answering from a fixed table of credential pairs.
//!
//! Each listed pair carries an explicit verdict. Pairs that are not listed get
//! [`AuthError::UnknownCredentials`]: the table does not imply a rule for anything else.

use crate::{AuthError, AuthProvider, AuthResult};
use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use userauth_api_types::request::AuthRequest;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accept,
    Reject,
}

#[derive(Deserialize, Clone)]
pub struct CredentialEntry {
    pub username: String,
    pub password: String,
    pub verdict: Verdict,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_credentials")]
    pub credentials: Vec<CredentialEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: default_credentials(),
        }
    }
}

/// The two pairs with an observed verdict.
fn default_credentials() -> Vec<CredentialEntry> {
    vec![
        CredentialEntry {
            username: "admin".to_owned(),
            password: "admin".to_owned(),
            verdict: Verdict::Reject,
        },
        CredentialEntry {
            username: "admin".to_owned(),
            password: "qwerty".to_owned(),
            verdict: Verdict::Accept,
        },
    ]
}

type CredentialKey = [u8; 32];

pub struct TableAuthProvider {
    verdicts: HashMap<CredentialKey, Verdict>,
}

impl TableAuthProvider {
    pub fn new(table_config: Config) -> AuthResult<Self> {
        if table_config.credentials.is_empty() {
            return Err(anyhow::anyhow!("credential table is empty").into());
        }

        let mut verdicts = HashMap::with_capacity(table_config.credentials.len());

        for entry in &table_config.credentials {
            let key = credential_key(&entry.username, &entry.password);
            if verdicts.insert(key, entry.verdict).is_some() {
                return Err(anyhow::anyhow!(
                    "credential table lists user '{}' more than once with the same password",
                    entry.username
                )
                .into());
            }
        }

        tracing::debug!(entries = verdicts.len(), "Loaded credential table");

        Ok(Self { verdicts })
    }
}

/// Length-prefixing the username keeps ("ab", "c") and ("a", "bc") apart.
fn credential_key(username: &str, password: &str) -> CredentialKey {
    let mut hasher = Sha256::new();
    hasher.update((username.len() as u64).to_le_bytes());
    hasher.update(username.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[async_trait]
impl AuthProvider for TableAuthProvider {
    type Config = Config;

    async fn healthcheck(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn authenticate(&self, request: &AuthRequest) -> AuthResult<()> {
        match self.verdicts.get(&credential_key(&request.username, &request.password)) {
            Some(Verdict::Accept) => Ok(()),
            Some(Verdict::Reject) => Err(AuthError::AuthenticationFailed),
            None => {
                tracing::warn!(username = %request.username, "No verdict known for credentials");
                Err(AuthError::UnknownCredentials)
            },
        }
    }
}
