use thiserror::Error;

/// Error type for password hashing and verification.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Encoded record does not have the expected format")]
    InvalidRecordFormat,

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Incompatible hash version: {0}")]
    IncompatibleVersion(u32),

    #[error("Malformed cost parameters: {0}")]
    MalformedParameters(String),
}
