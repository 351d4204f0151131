use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued credential, in seconds.
pub const CREDENTIAL_TTL_SECONDS: i64 = 60 * 60;

/// Claims carried inside a session credential.
///
/// All fields are required; a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Subject email address
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for a subject, expiring one TTL after `issued_at`.
    ///
    /// # Arguments
    /// * `subject_id` - Unique user identifier
    /// * `email` - User email address
    /// * `issued_at` - Issuance time (Unix timestamp)
    pub fn for_subject(subject_id: impl ToString, email: impl ToString, issued_at: i64) -> Self {
        Self {
            sub: subject_id.to_string(),
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + CREDENTIAL_TTL_SECONDS,
        }
    }

    /// Check if the credential is expired at `current_timestamp`.
    ///
    /// A credential is still valid at exactly its expiration second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }

    /// Project the claims onto the identity exposed to request handlers.
    pub fn into_identity(self) -> RequestIdentity {
        RequestIdentity {
            id: self.sub,
            email: self.email,
        }
    }
}

/// Verified, request-scoped identity derived from a valid credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    pub id: String,
    pub email: String,
}
