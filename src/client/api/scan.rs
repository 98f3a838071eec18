//! Scan listing API trait

use async_trait::async_trait;

use crate::client::models::{ScanResponse, Token};
use crate::error::Result;

/// Scan retrieval operations
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// Fetch the scan list with a bearer token.
    ///
    /// Every HTTP status is returned as-is; only transport failures and an
    /// empty token are errors.
    async fn list_scans(&self, token: &Token) -> Result<ScanResponse>;
}
