use thiserror::Error;

/// Error type for password hashing and verification.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// Parameters were rejected or the hash could not be computed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a parseable PHC string
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
