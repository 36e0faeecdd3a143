use thiserror::Error;

/// Custom error type for the location boundary, allow us to differentiate
/// between errors.
///
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Provider {0} unavailable")]
    ProviderUnavailable(String),
    #[error("Unknown error.")]
    Unknown,
}
