use std::sync::Arc;

use auth::Authenticator;
use auth::GateDecision;
use auth::RequestIdentity;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use super::handlers::LOGIN_PAGE;
use super::session::SessionCookies;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::models::UserId;
use crate::domain::vehicle::models::VehicleOwner;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

impl TryFrom<RequestIdentity> for AuthenticatedUser {
    type Error = UserIdError;

    fn try_from(identity: RequestIdentity) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId::from_string(&identity.id)?,
            email: identity.email,
        })
    }
}

impl From<&AuthenticatedUser> for VehicleOwner {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id,
            email: user.email.clone(),
        }
    }
}

/// State the session gate needs; cheap to clone into the middleware layer.
#[derive(Clone)]
pub struct SessionGate {
    pub authenticator: Arc<Authenticator>,
    pub cookies: SessionCookies,
}

impl SessionGate {
    pub fn new(authenticator: Arc<Authenticator>, cookies: SessionCookies) -> Self {
        Self {
            authenticator,
            cookies,
        }
    }
}

/// Middleware that admits requests carrying a valid session credential.
///
/// Every rejection (no cookie, tampered, expired, foreign key) yields the same
/// redirect to the login page and the wrapped handler never runs.
pub async fn require_session(
    State(gate): State<SessionGate>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let artifact = gate.cookies.extract(&jar);

    let identity = match gate.authenticator.admit(artifact) {
        GateDecision::Forward(identity) => identity,
        GateDecision::Reject => {
            if artifact.is_some() {
                tracing::debug!(uri = %req.uri(), "Session credential rejected");
            }
            return Redirect::to(LOGIN_PAGE).into_response();
        }
    };

    let user = match AuthenticatedUser::try_from(identity) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "Session credential carries a malformed subject");
            return Redirect::to(LOGIN_PAGE).into_response();
        }
    };

    req.extensions_mut().insert(user);

    next.run(req).await
}
