//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and token acquisition
//! - [`ScanApi`] - Scan listing
//!
//! The [`PlatformApi`](super::PlatformApi) super-trait combines both.

mod auth;
mod scan;

pub use auth::AuthApi;
pub use scan::ScanApi;
