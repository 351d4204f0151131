use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::HOME_PAGE;
use super::SIGNUP_EXISTS_PAGE;
use super::SIGNUP_INVALID_PAGE;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::MobileNumber;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::SignupCommand;
use crate::inbound::http::router::AppState;

/// Register a new account and log it in immediately.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<SignupForm>, FormRejection>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let command = match form {
        Ok(Form(form)) => form.try_into_command(),
        Err(e) => {
            tracing::info!(error = %e, "Signup rejected: malformed form");
            return Ok((jar, Redirect::to(SIGNUP_INVALID_PAGE)));
        }
    };

    let command = match command {
        Ok(command) => command,
        Err(e) => {
            tracing::info!(error = %e, "Signup rejected: invalid input");
            return Ok((jar, Redirect::to(SIGNUP_INVALID_PAGE)));
        }
    };

    let user = match state.user_service.create_user(command).await {
        Ok(user) => user,
        Err(UserError::EmailAlreadyExists(email)) => {
            tracing::info!(email = %email, "Signup rejected: email already registered");
            return Ok((jar, Redirect::to(SIGNUP_EXISTS_PAGE)));
        }
        Err(e) if e.is_invalid_input() => {
            tracing::info!(error = %e, "Signup rejected: invalid input");
            return Ok((jar, Redirect::to(SIGNUP_INVALID_PAGE)));
        }
        Err(e) => return Err(ApiError::from(e)),
    };

    let token = state
        .authenticator
        .issue_credential(&user.id.to_string(), user.email.as_str())
        .map_err(|e| {
            ApiError::InternalServerError(format!(
                "Credential issuance failed for new user {}: {}",
                user.id, e
            ))
        })?;

    Ok((state.session_cookies.attach(jar, token), Redirect::to(HOME_PAGE)))
}

/// HTML form body for signing up (raw strings)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupForm {
    name: String,
    mobile: String,
    email: String,
    password: String,
}

impl SignupForm {
    fn try_into_command(self) -> Result<SignupCommand, UserError> {
        let name = PersonName::new(self.name)?;
        let mobile = MobileNumber::new(self.mobile)?;
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(SignupCommand::new(name, mobile, email, self.password))
    }
}
