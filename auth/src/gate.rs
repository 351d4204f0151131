use crate::credential::CredentialCodec;
use crate::credential::RequestIdentity;

/// Outcome of the session gate for a single request.
///
/// Exactly one of the two variants is produced for every request: either the
/// request proceeds with a verified identity, or it is turned away. Why it was
/// turned away is never part of the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Forward(RequestIdentity),
    Reject,
}

impl GateDecision {
    pub fn is_forward(&self) -> bool {
        matches!(self, GateDecision::Forward(_))
    }
}

/// Decide whether a request carrying `artifact` may proceed at time `now`.
///
/// A missing artifact and an artifact that fails verification for any reason
/// both resolve to [`GateDecision::Reject`].
pub fn admit(codec: &CredentialCodec, artifact: Option<&str>, now: i64) -> GateDecision {
    let Some(artifact) = artifact else {
        return GateDecision::Reject;
    };

    match codec.verify_at(artifact, now) {
        Ok(identity) => GateDecision::Forward(identity),
        Err(_) => GateDecision::Reject,
    }
}
