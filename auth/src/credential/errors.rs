use thiserror::Error;

/// Error type for credential issuance.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Failed to encode credential: {0}")]
    EncodingFailed(String),
}

/// Verification failure.
///
/// Deliberately carries no detail: a bad signature, a malformed payload and an
/// expired credential are indistinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid credential")]
pub struct InvalidCredential;
