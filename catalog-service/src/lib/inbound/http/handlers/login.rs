use std::sync::Arc;

use auth::AuthenticationError;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::HOME_PAGE;
use super::LOGIN_FAILED_PAGE;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

/// Authenticate with email and password.
///
/// Unknown email, wrong password and malformed input all end on the same
/// failure page so the response never reveals which one happened.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let Ok(Form(form)) = form else {
        tracing::info!("Login rejected: malformed form");
        return rejected(jar);
    };

    let Ok(email) = EmailAddress::new(form.email) else {
        tracing::info!("Login rejected: malformed email");
        return rejected(jar);
    };

    let user = match state.user_service.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(UserError::NotFoundByEmail(_)) => {
            let authenticator = Arc::clone(&state.authenticator);
            let password = form.password;

            // Same Argon2 work as a wrong password on an existing account.
            tokio::task::spawn_blocking(move || authenticator.reject_unknown(&password))
                .await
                .map_err(|e| {
                    ApiError::InternalServerError(format!("Authentication task failed: {}", e))
                })?;

            tracing::info!(email = %email, "Login rejected: unknown email");
            return rejected(jar);
        }
        Err(e) => return Err(ApiError::from(e)),
    };

    let authenticator = Arc::clone(&state.authenticator);
    let subject_id = user.id.to_string();
    let subject_email = user.email.as_str().to_string();
    let stored_hash = user.password_hash;
    let password = form.password;

    // Argon2 verification is CPU bound.
    let outcome = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &stored_hash, &subject_id, &subject_email)
    })
    .await
    .map_err(|e| ApiError::InternalServerError(format!("Authentication task failed: {}", e)))?;

    match outcome {
        Ok(result) => {
            tracing::info!(user_id = %user.id, "User logged in");
            let jar = state.session_cookies.attach(jar, result.access_token);
            Ok((jar, Redirect::to(HOME_PAGE)))
        }
        Err(AuthenticationError::InvalidCredentials) => {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            rejected(jar)
        }
        Err(e) => Err(ApiError::InternalServerError(format!(
            "Authentication failed: {}",
            e
        ))),
    }
}

fn rejected(jar: CookieJar) -> Result<(CookieJar, Redirect), ApiError> {
    Ok((jar, Redirect::to(LOGIN_FAILED_PAGE)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}
