use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_vehicle::create_vehicle;
use super::handlers::home::home;
use super::handlers::list_vehicles::list_vehicles;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::signup::signup;
use super::middleware::require_session;
use super::middleware::SessionGate;
use super::session::SessionCookies;
use crate::domain::user::ports::UserServicePort;
use crate::domain::vehicle::ports::VehicleServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub vehicle_service: Arc<dyn VehicleServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub session_cookies: SessionCookies,
}

/// Build the HTTP application.
///
/// # Arguments
/// * `state` - Services shared by every handler
/// * `static_dir` - Directory served for every unmatched path, if any
pub fn create_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let gate = SessionGate::new(Arc::clone(&state.authenticator), state.session_cookies);

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", get(logout).post(logout));

    let protected_routes = Router::new()
        .route("/home", get(home))
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route_layer(middleware::from_fn_with_state(gate, require_session));

    // Request headers are left out of the span: they carry the session cookie.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let mut router = Router::new().merge(public_routes).merge(protected_routes);

    if let Some(static_dir) = static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router.layer(trace_layer).with_state(state)
}
