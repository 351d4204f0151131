pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::RequestIdentity;
pub use claims::SessionClaims;
pub use claims::CREDENTIAL_TTL_SECONDS;
pub use codec::CredentialCodec;
pub use errors::CredentialError;
pub use errors::InvalidCredential;
