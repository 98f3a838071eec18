//! Scan models

/// Raw response from the scans-listing endpoint.
///
/// The body is kept verbatim; scan records are opaque to this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body text
    pub body: String,
}

impl ScanResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
