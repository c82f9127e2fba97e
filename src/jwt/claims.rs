use serde::Deserialize;
use serde::Serialize;

/// Claims embedded inside a signed token.
///
/// A flat record with explicit fields only; serialized field names are
/// the RFC 7519 registered names. All timestamps are second-precision
/// Unix time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier
    pub sub: u64,

    /// Issued at
    pub iat: i64,

    /// Not valid before
    pub nbf: i64,

    /// Expires at
    pub exp: i64,

    /// Issuer
    pub iss: String,
}
