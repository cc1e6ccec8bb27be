use anyhow::Context;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use userauth_auth::AuthProvider;
use userauth_server::ServiceConfig;

#[derive(Deserialize)]
pub struct Config<A: AuthProvider> {
    pub service: ServiceConfig,
    #[serde(flatten)]
    pub auth_config: A::Config,
}

impl<A> Config<A>
where
    A: AuthProvider,
    A::Config: for<'de> Deserialize<'de>,
{
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = read_to_string(path)
            .context("Failed to read config file from disk, is it present?")?;

        serde_yaml::from_str(&raw)
            .context("Failed to deserialize config file, please make sure its in the right format")
    }
}
