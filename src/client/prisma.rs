//! Prisma Cloud API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, StatusCode};

use super::models::LoginResponse;
use super::{AuthApi, Credentials, Platform, ScanApi, ScanResponse, Token};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Fixed timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Scan listing path on the Compute console
const SCANS_PATH: &str = "/api/v1/scans";

const ACCEPT_JSON: &str = "application/json; charset=UTF-8";
const CONTENT_JSON: &str = "application/json";

/// Prisma Cloud API client bound to one platform base URL
pub struct PrismaClient {
    http: HttpClient,
    base_url: String,
    platform: Platform,
}

impl PrismaClient {
    /// Create a client for `base_url`.
    ///
    /// `insecure` disables TLS certificate verification.
    pub fn new(base_url: impl Into<String>, platform: Platform, insecure: bool) -> Result<Self> {
        if insecure {
            warn!("TLS certificate verification is disabled");
        }

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(insecure)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            platform,
        })
    }

    /// Client for the Compute console (`TL_URL`)
    pub fn compute(config: &Config) -> Result<Self> {
        Self::new(&config.compute_url, Platform::Compute, config.insecure)
    }

    /// Client for the CSPM API (`PC_URL`)
    pub fn cspm(config: &Config) -> Result<Self> {
        Self::new(config.require_cspm_url()?, Platform::Cspm, config.insecure)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthApi for PrismaClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Token> {
        let url = self.url(self.platform.auth_path());
        debug!("Authenticating against {} at {}", self.platform, url);

        // `json` sets the content-type header
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, ACCEPT_JSON)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::AuthenticationFailed {
                status: status.as_u16(),
            }
            .into());
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        let login: LoginResponse = serde_json::from_str(&response_text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        info!("Token acquired");
        Ok(login.token)
    }
}

#[async_trait]
impl ScanApi for PrismaClient {
    async fn list_scans(&self, token: &Token) -> Result<ScanResponse> {
        if token.is_empty() {
            return Err(ApiError::MissingToken.into());
        }

        let url = self.url(SCANS_PATH);
        debug!("Fetching scans from {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, ACCEPT_JSON)
            .header(CONTENT_TYPE, CONTENT_JSON)
            .header(AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::from)?;

        Ok(ScanResponse { status, body })
    }
}
