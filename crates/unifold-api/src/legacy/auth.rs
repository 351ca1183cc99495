// Legacy API authentication
//
// Cookie-based session login/logout. The login endpoint sets a session
// cookie in the transport's jar; subsequent requests replay it.

use secrecy::SecretString;
use serde_json::json;
use tracing::debug;

use crate::auth::LoginRequest;
use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::transport::Transport;

impl<T: Transport> LegacyClient<T> {
    /// Authenticate with the controller using username/password.
    ///
    /// On success the session cookie is held by the transport and used for
    /// all subsequent requests. A rejected login surfaces as
    /// [`Error::BadStatus`]. The endpoint differs by platform:
    /// - UniFi OS: `POST /api/auth/login`
    /// - Standalone: `POST /api/login`
    pub fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let path = self.platform().login_path();
        debug!(username, path, "logging in");

        self.post_unchecked(path, &LoginRequest { username, password })?;

        debug!("login successful");
        Ok(())
    }

    /// End the current session.
    ///
    /// - UniFi OS: `POST /api/auth/logout`
    /// - Standalone: `POST /api/logout`
    pub fn logout(&self) -> Result<(), Error> {
        let path = self.platform().logout_path();
        debug!(path, "logging out");
        self.post_unchecked(path, &json!({}))
    }
}
