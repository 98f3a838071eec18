//! Prisma Cloud API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod prisma;
pub mod session;

pub use api::{AuthApi, ScanApi};
#[cfg(test)]
pub use mock::MockPlatformClient;
pub use models::{Credentials, Platform, ScanResponse, Token};
pub use prisma::PrismaClient;
pub use session::Unauthenticated;

/// Combined platform API: authenticate, then list scans
pub trait PlatformApi: AuthApi + ScanApi {}

impl<T: AuthApi + ScanApi> PlatformApi for T {}
