use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;

use super::LOGIN_PAGE;
use crate::inbound::http::router::AppState;

/// Discard the session cookie on the client.
///
/// Credentials are stateless, so a copy captured before logout stays valid
/// until it expires.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (state.session_cookies.clear(jar), Redirect::to(LOGIN_PAGE))
}
