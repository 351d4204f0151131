use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;

/// Name of the cookie carrying the session credential.
pub const SESSION_COOKIE: &str = "token";

/// Reads and writes the session credential as an HTTP cookie.
///
/// Holds no state besides the cookie policy; the credential itself is opaque
/// here.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    /// # Arguments
    /// * `secure` - Whether the cookie is restricted to HTTPS
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Store `artifact` on the outgoing response.
    pub fn attach(&self, jar: CookieJar, artifact: String) -> CookieJar {
        jar.add(self.cookie(artifact))
    }

    /// Read the credential from the incoming request, if the client sent one.
    pub fn extract<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(SESSION_COOKIE).map(|cookie| cookie.value())
    }

    /// Instruct the client to discard the credential immediately.
    ///
    /// The removal cookie is emitted even when the request carried no session.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        let mut removal = self.cookie(String::new());
        removal.make_removal();
        jar.add(removal)
    }

    fn cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, value))
            .http_only(true)
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }
}
