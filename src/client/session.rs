//! Session state machine
//!
//! A run moves strictly forward:
//! [`Unauthenticated`] → [`Authenticated`] → [`ScanFetched`].
//! Any failed transition returns an error and the session is gone; there
//! are no retries and no way back. A token can only be reached through
//! [`Authenticated`], so scans are never requested without one.

use super::api::{AuthApi, ScanApi};
use super::models::{Credentials, ScanResponse, Token};
use crate::error::{ApiError, Result};

/// Session before login
pub struct Unauthenticated<'a, A> {
    api: &'a A,
}

/// Session holding a non-empty bearer token
pub struct Authenticated<'a, A> {
    api: &'a A,
    token: Token,
}

/// Session that has fetched the scan list
#[derive(Debug)]
pub struct ScanFetched {
    response: ScanResponse,
}

impl<'a, A: AuthApi> Unauthenticated<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Log in. An empty token is treated as no token at all.
    pub async fn authenticate(self, credentials: &Credentials) -> Result<Authenticated<'a, A>> {
        let token = self.api.authenticate(credentials).await?;
        if token.is_empty() {
            return Err(ApiError::MissingToken.into());
        }

        Ok(Authenticated {
            api: self.api,
            token,
        })
    }
}

#[cfg(test)]
impl<A> Authenticated<'_, A> {
    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl<A: ScanApi> Authenticated<'_, A> {
    pub async fn fetch_scans(self) -> Result<ScanFetched> {
        let response = self.api.list_scans(&self.token).await?;
        Ok(ScanFetched { response })
    }
}

impl ScanFetched {
    #[cfg(test)]
    pub fn response(&self) -> &ScanResponse {
        &self.response
    }

    pub fn into_response(self) -> ScanResponse {
        self.response
    }
}
