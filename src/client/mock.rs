//! Mock platform API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ScanApi};
use super::models::{Credentials, ScanResponse, Token};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockPlatformClient::new()
///     .with_token("abc")
///     .await
///     .with_scans(500, "server error")
///     .await;
/// ```
pub struct MockPlatformClient {
    /// Token to return from authenticate
    token: Arc<Mutex<Token>>,
    /// Response to return from list_scans
    scans: Arc<Mutex<ScanResponse>>,
    /// Error to return from authenticate - consumed on first use
    auth_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Tokens received by list_scans, in call order
    captured_tokens: Arc<Mutex<Vec<Token>>>,
}

impl Default for MockPlatformClient {
    fn default() -> Self {
        Self {
            token: Arc::new(Mutex::new(Token::new("mock-token"))),
            scans: Arc::new(Mutex::new(ScanResponse {
                status: 200,
                body: "[]".to_string(),
            })),
            auth_error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub list_scans: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.authenticate + self.list_scans
    }
}

impl MockPlatformClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned from authenticate.
    pub async fn with_token(self, token: &str) -> Self {
        *self.token.lock().await = Token::new(token);
        self
    }

    /// Configure the response returned from list_scans.
    pub async fn with_scans(self, status: u16, body: &str) -> Self {
        *self.scans.lock().await = ScanResponse {
            status,
            body: body.to_string(),
        };
        self
    }

    /// Configure an error to return from the next authenticate call.
    pub async fn with_auth_error(self, error: ApiError) -> Self {
        *self.auth_error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get the tokens passed to list_scans.
    pub async fn captured_tokens(&self) -> Vec<Token> {
        self.captured_tokens.lock().await.clone()
    }
}

#[async_trait]
impl AuthApi for MockPlatformClient {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<Token> {
        self.call_count.lock().await.authenticate += 1;

        if let Some(err) = self.auth_error.lock().await.take() {
            return Err(err.into());
        }

        Ok(self.token.lock().await.clone())
    }
}

#[async_trait]
impl ScanApi for MockPlatformClient {
    async fn list_scans(&self, token: &Token) -> Result<ScanResponse> {
        self.call_count.lock().await.list_scans += 1;
        self.captured_tokens.lock().await.push(token.clone());

        if token.is_empty() {
            return Err(ApiError::MissingToken.into());
        }

        Ok(self.scans.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_defaults() {
        let mock = MockPlatformClient::new();
        let token = mock
            .authenticate(&Credentials::new("k", "s"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "mock-token");

        let scans = mock.list_scans(&token).await.unwrap();
        assert_eq!(scans.status, 200);
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_auth_error_consumed_once() {
        let mock = MockPlatformClient::new()
            .with_auth_error(ApiError::AuthenticationFailed { status: 401 })
            .await;
        let creds = Credentials::new("k", "s");

        assert!(mock.authenticate(&creds).await.is_err());
        assert!(mock.authenticate(&creds).await.is_ok());
        assert_eq!(mock.call_counts().await.authenticate, 2);
    }
}
