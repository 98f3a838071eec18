//! Scans command: authenticate, fetch the scan list, log it

use log::{debug, info};

use crate::client::{PlatformApi, ScanResponse, Unauthenticated};
use crate::config::Config;
use crate::error::Result;

/// Run the full flow against `api` and log the scan response.
///
/// A non-success scan status is logged like any other response and is not
/// an error.
pub async fn run<A: PlatformApi>(config: &Config, api: &A) -> Result<ScanResponse> {
    let session = Unauthenticated::new(api)
        .authenticate(&config.credentials)
        .await?;

    let response = session.fetch_scans().await?.into_response();
    if !response.is_success() {
        debug!("Scan request returned non-success status {}", response.status);
    }

    info!("{}", response.status);
    info!("{}", response.body);

    Ok(response)
}
