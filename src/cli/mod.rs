//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::Platform;

pub mod auth;
pub mod scans;

/// cwpscan - fetch the scan list from a Prisma Cloud Compute console
///
/// Credentials and URLs are read from PC_IDENTITY, PC_SECRET, TL_URL
/// and (for CSPM login only) PC_URL.
#[derive(Parser, Debug)]
#[command(name = "cwpscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `scans`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable TLS certificate verification (INSECURE)
    #[arg(long, global = true, env = "CWPSCAN_INSECURE", hide_env = true)]
    pub insecure: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "CWPSCAN_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Commands {
    /// Authenticate and log the scan list
    Scans,

    /// Verify credentials without fetching anything
    Auth {
        /// Platform to log in to
        #[arg(long, value_enum, default_value_t = PlatformArg::Compute)]
        platform: PlatformArg,
    },
}

/// Login target selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// Compute console at TL_URL
    Compute,
    /// CSPM API at PC_URL
    Cspm,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Compute => Platform::Compute,
            PlatformArg::Cspm => Platform::Cspm,
        }
    }
}
