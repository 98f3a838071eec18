//! Auth command: verify credentials against a platform

use log::info;

use crate::client::{AuthApi, Platform, PrismaClient, Unauthenticated};
use crate::config::Config;
use crate::error::Result;

/// Build a client for `platform` from the config and log in
pub async fn run(config: &Config, platform: Platform) -> Result<()> {
    let client = match platform {
        Platform::Compute => PrismaClient::compute(config)?,
        Platform::Cspm => PrismaClient::cspm(config)?,
    };

    verify(config, &client, platform).await
}

/// Log in with `api`. The token is dropped without being printed.
pub async fn verify<A: AuthApi>(config: &Config, api: &A, platform: Platform) -> Result<()> {
    Unauthenticated::new(api)
        .authenticate(&config.credentials)
        .await?;

    info!("Credentials accepted by {}", platform);
    Ok(())
}
