use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use catalog_service::domain::user::errors::UserError;
use catalog_service::domain::user::models::EmailAddress;
use catalog_service::domain::user::models::User;
use catalog_service::domain::user::ports::UserRepository;
use catalog_service::domain::user::service::UserService;
use catalog_service::domain::vehicle::errors::VehicleError;
use catalog_service::domain::vehicle::models::Vehicle;
use catalog_service::domain::vehicle::models::VehicleType;
use catalog_service::domain::vehicle::ports::VehicleRepository;
use catalog_service::domain::vehicle::service::VehicleService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::inbound::http::router::AppState;
use catalog_service::inbound::http::session::SessionCookies;
use reqwest::header::SET_COOKIE;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-session-signing-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_users(InMemoryUserRepository::default()).await
    }

    /// Spawn the application over a specific user storage adapter
    pub async fn spawn_with_users<UR: UserRepository>(user_repository: UR) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let state = AppState {
            user_service: Arc::new(UserService::new(Arc::new(user_repository))),
            vehicle_service: Arc::new(VehicleService::new(Arc::new(
                InMemoryVehicleRepository::default(),
            ))),
            authenticator: Arc::clone(&authenticator),
            // Plain http in tests
            session_cookies: SessionCookies::new(false),
        };

        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
        let router = create_router(state, Some(static_dir));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            // Redirects are asserted on, never followed
            api_client: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Failed to create reqwest client"),
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request carrying a session cookie
    pub fn get_with_session(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path)
            .header(reqwest::header::COOKIE, format!("token={}", token))
    }

    /// Helper to make POST request carrying a session cookie
    pub fn post_with_session(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path)
            .header(reqwest::header::COOKIE, format!("token={}", token))
    }

    /// Submit the signup form
    pub async fn signup(
        &self,
        name: &str,
        mobile: &str,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/signup")
            .form(&[
                ("name", name),
                ("mobile", mobile),
                ("email", email),
                ("password", password),
            ])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Submit the login form
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign up a fresh account and return its session credential
    pub async fn signup_session(&self, email: &str, password: &str) -> String {
        let response = self.signup("N", "M", email, password).await;
        session_token(&response).expect("Signup did not set a session cookie")
    }
}

/// Value of the session cookie set by `response`, if any.
pub fn session_token(response: &reqwest::Response) -> Option<String> {
    session_set_cookie(response).map(|header| {
        header
            .trim_start_matches("token=")
            .split(';')
            .next()
            .unwrap_or_default()
            .to_string()
    })
}

/// Full `Set-Cookie` header for the session cookie, if any.
pub fn session_set_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("token="))
        .map(str::to_string)
}

/// `Location` header of a redirect response.
pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("Response is not a redirect")
        .to_str()
        .expect("Location is not ASCII")
}

/// User storage keyed by normalized email
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let key = user.email.as_str().to_string();
        if users.contains_key(&key) {
            return Err(UserError::EmailAlreadyExists(key));
        }
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(email.as_str()).cloned())
    }
}

/// Vehicle storage in insertion order
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Mutex<Vec<Vehicle>>,
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn insert(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError> {
        self.vehicles.lock().unwrap().push(vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_type(
        &self,
        vehicle_type: Option<VehicleType>,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        let vehicles = self.vehicles.lock().unwrap();
        Ok(vehicles
            .iter()
            .rev()
            .filter(|v| vehicle_type.as_ref().map_or(true, |t| &v.vehicle_type == t))
            .cloned()
            .collect())
    }
}

/// User storage whose every call fails like an unreachable database
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: User) -> Result<User, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_email(&self, _email: &EmailAddress) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }
}
