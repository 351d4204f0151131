//! Session authentication library
//!
//! Provides the authentication core shared by the catalog service:
//! - Password hashing (Argon2id, fixed cost)
//! - Session credential issuance and verification (HS256 JWT, one hour lifetime)
//! - The session gate decision used by request middleware
//!
//! Everything here is pure computation. Reading and writing cookies, storage
//! lookups and redirects belong to the service using this crate.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Credentials
//! ```
//! use auth::CredentialCodec;
//!
//! let codec = CredentialCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("user123", "alice@example.com").unwrap();
//! let identity = codec.verify(&token).unwrap();
//! assert_eq!(identity.email, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, GateDecision, PasswordHasher};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//!
//! // Login: verify and issue credential
//! let result = auth
//!     .authenticate("password123", &hash, "user123", "alice@example.com")
//!     .unwrap();
//!
//! // Every protected request: run the gate
//! assert!(matches!(
//!     auth.admit(Some(&result.access_token)),
//!     GateDecision::Forward(_)
//! ));
//! assert_eq!(auth.admit(None), GateDecision::Reject);
//! ```

pub mod authenticator;
pub mod credential;
pub mod gate;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use credential::CredentialCodec;
pub use credential::CredentialError;
pub use credential::InvalidCredential;
pub use credential::RequestIdentity;
pub use credential::SessionClaims;
pub use credential::CREDENTIAL_TTL_SECONDS;
pub use gate::GateDecision;
pub use password::PasswordError;
pub use password::PasswordHasher;
