//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform to authenticate against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Compute console (`TL_URL`)
    #[default]
    Compute,

    /// CSPM API (`PC_URL`)
    Cspm,
}

impl Platform {
    /// Path of the login endpoint, relative to the platform base URL
    pub fn auth_path(self) -> &'static str {
        match self {
            Platform::Compute => "/api/v1/authenticate",
            Platform::Cspm => "/login",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Compute => write!(f, "compute"),
            Platform::Cspm => write!(f, "cspm"),
        }
    }
}

/// Access key and secret, serialized as the login request body
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "username")]
    access_key: String,

    #[serde(rename = "password")]
    access_secret: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, access_secret: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            access_secret: access_secret.into(),
        }
    }

    #[cfg(test)]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    #[cfg(test)]
    pub fn access_secret(&self) -> &str {
        &self.access_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("access_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token returned by the login endpoint
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Successful login response body
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Token,
}
