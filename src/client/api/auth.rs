//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Credentials, Token};
use crate::error::Result;

/// Login operations for a platform endpoint
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    ///
    /// Any status other than 200 is reported as
    /// [`ApiError::AuthenticationFailed`](crate::error::ApiError::AuthenticationFailed).
    async fn authenticate(&self, credentials: &Credentials) -> Result<Token>;
}
