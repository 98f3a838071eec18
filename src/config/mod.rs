//! Configuration loaded from the process environment

use crate::client::Credentials;
use crate::error::{ConfigError, Result};

/// Access key for the platform
pub const IDENTITY_VAR: &str = "PC_IDENTITY";

/// Access secret for the platform
pub const SECRET_VAR: &str = "PC_SECRET";

/// Compute console base URL
pub const COMPUTE_URL_VAR: &str = "TL_URL";

/// CSPM API base URL (only needed for CSPM login)
pub const CSPM_URL_VAR: &str = "PC_URL";

/// Runtime configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials exchanged for a bearer token
    pub credentials: Credentials,

    /// Compute console base URL, without trailing slash
    pub compute_url: String,

    /// CSPM API base URL, if configured
    pub cspm_url: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env(insecure: bool) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), insecure)
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Required variables are checked in order and the first absent one is
    /// reported. Empty or whitespace-only values count as absent.
    pub fn from_lookup<F>(lookup: F, insecure: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = require(&lookup, IDENTITY_VAR)?;
        let access_secret = require(&lookup, SECRET_VAR)?;
        let compute_url = require(&lookup, COMPUTE_URL_VAR)?;
        let cspm_url = non_empty(&lookup, CSPM_URL_VAR);

        Ok(Self {
            credentials: Credentials::new(access_key, access_secret),
            compute_url: trim_base_url(&compute_url),
            cspm_url: cspm_url.as_deref().map(trim_base_url),
            insecure,
        })
    }

    /// CSPM base URL, or an error naming the missing variable
    pub fn require_cspm_url(&self) -> Result<&str> {
        self.cspm_url
            .as_deref()
            .ok_or_else(|| ConfigError::Missing(CSPM_URL_VAR.to_string()).into())
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

fn require<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, name).ok_or_else(|| ConfigError::Missing(name.to_string()).into())
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
