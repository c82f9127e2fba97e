use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// Algorithm identifier stored in encoded records.
const ALGORITHM_ID: &str = "argon2id";

/// Cost parameters for Argon2id key derivation.
///
/// Fixed at hasher construction time. Verification re-derives with the
/// parameters embedded in the stored record, so these can be tuned over
/// time without invalidating existing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Iteration count (time cost)
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
    /// Salt length in bytes
    pub salt_length: usize,
    /// Derived key length in bytes
    pub key_length: usize,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 3,
            parallelism: 2,
            salt_length: 16,
            key_length: 32,
        }
    }
}

/// Password hashing implementation using Argon2id.
///
/// Produces self-describing encoded records of the form
/// `$argon2id$v=19$m=65536,t=3,p=2$<salt>$<hash>` with base64
/// (standard alphabet, no padding) salt and hash segments.
pub struct PasswordHasher {
    params: HashParams,
}

impl PasswordHasher {
    /// Create a hasher with secure default parameters.
    ///
    /// # Returns
    /// PasswordHasher configured with 64 MiB memory, 3 iterations,
    /// parallelism 2, 16-byte salt, and 32-byte derived key
    pub fn new() -> Self {
        Self::with_params(HashParams::default())
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `params` - Cost parameters to use for new hashes
    ///
    /// # Returns
    /// PasswordHasher instance
    pub fn with_params(params: HashParams) -> Self {
        Self { params }
    }

    /// Hash a plaintext password into an encoded record.
    ///
    /// Generates a random salt from the OS random source and derives a
    /// key with Argon2id using the configured parameters.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Encoded record string suitable for storage
    ///
    /// # Errors
    /// * `RandomSource` - Secure randomness is unavailable
    /// * `HashingFailed` - Key derivation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = vec![0u8; self.params.salt_length];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::RandomSource(e.to_string()))?;

        let key = derive_key(password.as_bytes(), &salt, &self.params)?;

        Ok(format!(
            "$argon2id$v={}$m={},t={},p={}${}${}",
            Version::V0x13 as u32,
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            STANDARD_NO_PAD.encode(&salt),
            STANDARD_NO_PAD.encode(&key),
        ))
    }

    /// Verify a plaintext password against an encoded record.
    ///
    /// Re-derives the key using the parameters and salt embedded in the
    /// record, then compares against the stored hash in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to check
    /// * `record` - Encoded record produced by `hash`
    ///
    /// # Returns
    /// True if the password matches, false if the record is well-formed
    /// but the password does not match
    ///
    /// # Errors
    /// * `InvalidRecordFormat` - Record structure or base64 segments invalid
    /// * `UnsupportedAlgorithm` - Record was produced by another algorithm
    /// * `IncompatibleVersion` - Record uses an unsupported Argon2 version
    /// * `MalformedParameters` - Cost parameters could not be parsed
    /// * `HashingFailed` - Key derivation failed
    pub fn verify(&self, password: &str, record: &str) -> Result<bool, PasswordError> {
        let (params, salt, expected) = decode_record(record)?;
        let derived = derive_key(password.as_bytes(), &salt, &params)?;

        Ok(derived.ct_eq(&expected).into())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: &HashParams,
) -> Result<Vec<u8>, PasswordError> {
    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(params.key_length),
    )
    .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = vec![0u8; params.key_length];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    Ok(key)
}

/// Decode an encoded record into its parameters, salt, and hash.
fn decode_record(record: &str) -> Result<(HashParams, Vec<u8>, Vec<u8>), PasswordError> {
    let parts: Vec<&str> = record.split('$').collect();
    // Leading '$' yields an empty first segment
    if parts.len() != 6 || !parts[0].is_empty() {
        return Err(PasswordError::InvalidRecordFormat);
    }

    if parts[1] != ALGORITHM_ID {
        return Err(PasswordError::UnsupportedAlgorithm(parts[1].to_string()));
    }

    let version: u32 = parts[2]
        .strip_prefix("v=")
        .ok_or_else(|| PasswordError::MalformedParameters(parts[2].to_string()))?
        .parse()
        .map_err(|_| PasswordError::MalformedParameters(parts[2].to_string()))?;
    if version != Version::V0x13 as u32 {
        return Err(PasswordError::IncompatibleVersion(version));
    }

    let mut memory_kib = None;
    let mut iterations = None;
    let mut parallelism = None;
    for field in parts[3].split(',') {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| PasswordError::MalformedParameters(parts[3].to_string()))?;
        let value: u32 = value
            .parse()
            .map_err(|_| PasswordError::MalformedParameters(parts[3].to_string()))?;
        match name {
            "m" => memory_kib = Some(value),
            "t" => iterations = Some(value),
            "p" => parallelism = Some(value),
            _ => return Err(PasswordError::MalformedParameters(parts[3].to_string())),
        }
    }
    let (memory_kib, iterations, parallelism) = match (memory_kib, iterations, parallelism) {
        (Some(m), Some(t), Some(p)) => (m, t, p),
        _ => return Err(PasswordError::MalformedParameters(parts[3].to_string())),
    };

    let salt = STANDARD_NO_PAD
        .decode(parts[4])
        .map_err(|_| PasswordError::InvalidRecordFormat)?;
    let hash = STANDARD_NO_PAD
        .decode(parts[5])
        .map_err(|_| PasswordError::InvalidRecordFormat)?;

    let params = HashParams {
        memory_kib,
        iterations,
        parallelism,
        salt_length: salt.len(),
        key_length: hash.len(),
    };

    Ok((params, salt, hash))
}
