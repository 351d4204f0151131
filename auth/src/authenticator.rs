use chrono::Utc;

use crate::credential::CredentialCodec;
use crate::credential::CredentialError;
use crate::credential::InvalidCredential;
use crate::credential::RequestIdentity;
use crate::gate;
use crate::gate::GateDecision;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and credential issuance.
///
/// Built once at startup from the signing secret and shared read-only between
/// requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: CredentialCodec,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed session credential
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for credential signing
    pub fn new(secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            codec: CredentialCodec::new(secret),
        }
    }

    /// Verify a password against a stored hash and issue a credential for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject_id` - Identifier of the user the hash belongs to
    /// * `email` - Email of the user the hash belongs to
    ///
    /// # Returns
    /// AuthenticationResult with the signed credential
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    /// * `CredentialError` - Credential issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject_id: &str,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.codec.issue(subject_id, email)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login attempt for a subject that does not exist.
    ///
    /// Costs as much as [`authenticate`](Self::authenticate) with a wrong
    /// password, so response latency does not reveal whether the account exists.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        self.password_hasher.verify_decoy(password);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a credential without password verification.
    ///
    /// Used right after signup, where the password was just chosen.
    pub fn issue_credential(
        &self,
        subject_id: &str,
        email: &str,
    ) -> Result<String, CredentialError> {
        self.codec.issue(subject_id, email)
    }

    /// Verify a credential and return the identity it carries.
    pub fn verify_credential(&self, artifact: &str) -> Result<RequestIdentity, InvalidCredential> {
        self.codec.verify(artifact)
    }

    /// Run the session gate against the current time.
    pub fn admit(&self, artifact: Option<&str>) -> GateDecision {
        gate::admit(&self.codec, artifact, Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let password = "my_password";
        let hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", "alice@example.com")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let identity = authenticator
            .verify_credential(&result.access_token)
            .expect("Credential validation failed");
        assert_eq!(identity.id, "user123");
        assert_eq!(identity.email, "alice@example.com");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let hash = PasswordHasher::new()
            .hash("my_password")
            .expect("Failed to hash password");

        let result =
            authenticator.authenticate("wrong_password", &hash, "user123", "alice@example.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_reject_unknown_subject() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        assert!(matches!(
            authenticator.reject_unknown("my_password"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let result =
            authenticator.authenticate("my_password", "not-a-phc-string", "user123", "a@x.com");
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_issue_and_admit() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let token = authenticator
            .issue_credential("user123", "alice@example.com")
            .expect("Failed to issue credential");

        assert_eq!(
            authenticator.admit(Some(&token)),
            GateDecision::Forward(RequestIdentity {
                id: "user123".to_string(),
                email: "alice@example.com".to_string(),
            })
        );
        assert_eq!(authenticator.admit(None), GateDecision::Reject);
    }

    #[test]
    fn test_admit_rejects_foreign_credential() {
        let issuer = Authenticator::new(b"test_secret_key_at_least_32_bytes!");
        let verifier = Authenticator::new(b"another_secret_key_at_least_32_bytes");

        let token = issuer
            .issue_credential("user123", "alice@example.com")
            .expect("Failed to issue credential");

        assert_eq!(verifier.admit(Some(&token)), GateDecision::Reject);
    }
}
