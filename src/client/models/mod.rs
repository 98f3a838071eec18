//! Platform API data models

mod auth;
mod scan;

pub use auth::{Credentials, LoginResponse, Platform, Token};
pub use scan::ScanResponse;
