use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::RequestIdentity;
use super::claims::SessionClaims;
use super::errors::CredentialError;
use super::errors::InvalidCredential;

/// Session credential codec.
///
/// Issues and verifies HS256-signed JWTs carrying [`SessionClaims`]. The codec is
/// pure: it performs no I/O and holds only the signing keys derived from the
/// process-wide secret.
pub struct CredentialCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
}

impl CredentialCodec {
    /// Create a new codec from the symmetric signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing credentials
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it once at startup from configuration, never from code
    pub fn new(secret: &[u8]) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        // Expiry is checked in `verify_at` against an explicit clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
        }
    }

    /// Issue a credential for a subject, valid for one hour from now.
    ///
    /// # Arguments
    /// * `subject_id` - User identifier
    /// * `email` - User email address
    ///
    /// # Returns
    /// Opaque signed credential string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject_id: &str, email: &str) -> Result<String, CredentialError> {
        self.issue_at(subject_id, email, Utc::now().timestamp())
    }

    /// Issue a credential as if the current time were `issued_at`.
    pub fn issue_at(
        &self,
        subject_id: &str,
        email: &str,
        issued_at: i64,
    ) -> Result<String, CredentialError> {
        self.encode(&SessionClaims::for_subject(subject_id, email, issued_at))
    }

    /// Sign arbitrary session claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, CredentialError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| CredentialError::EncodingFailed(e.to_string()))
    }

    /// Verify a credential against the current time.
    ///
    /// # Arguments
    /// * `artifact` - Credential string as received from the client
    ///
    /// # Returns
    /// Identity carried by the credential
    ///
    /// # Errors
    /// * `InvalidCredential` - Bad signature, malformed payload or expired
    pub fn verify(&self, artifact: &str) -> Result<RequestIdentity, InvalidCredential> {
        self.verify_at(artifact, Utc::now().timestamp())
    }

    /// Verify a credential as if the current time were `now`.
    pub fn verify_at(
        &self,
        artifact: &str,
        now: i64,
    ) -> Result<RequestIdentity, InvalidCredential> {
        let claims = decode::<SessionClaims>(artifact, &self.decoding_key, &self.validation)
            .map_err(|_| InvalidCredential)?
            .claims;

        if claims.is_expired(now) {
            return Err(InvalidCredential);
        }

        Ok(claims.into_identity())
    }
}
