use crate::error::EngineError;
use crate::fill::profile::UserProfile;
use std::time::Duration;

/// Request timeout for both collaborators. The hosting page stays
/// responsive; a stuck backend must not hang the engine.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// ProfileProvider trait — where the current user's profile comes from
// ============================================================================

pub trait ProfileProvider {
    /// Fetch the signed-in user's profile. `Ok(None)` means the user is
    /// not authenticated — a distinct outcome, not a transport error.
    fn fetch(&self) -> Result<Option<UserProfile>, EngineError>;
}

// ============================================================================
// HTTP provider — GET /api/auth/user on the dashboard backend
// ============================================================================

pub struct HttpProfileProvider {
    endpoint: String,
    session_cookie: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpProfileProvider {
    pub fn new(base_url: &str, session_cookie: Option<String>) -> Result<Self, EngineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EngineError::Network {
                context: "building profile client".to_string(),
                source: e,
            })?;

        Ok(HttpProfileProvider {
            endpoint: format!("{}/api/auth/user", base_url.trim_end_matches('/')),
            session_cookie,
            client,
        })
    }
}

impl ProfileProvider for HttpProfileProvider {
    fn fetch(&self) -> Result<Option<UserProfile>, EngineError> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().map_err(|e| EngineError::Network {
            context: "fetching profile".to_string(),
            source: e,
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(EngineError::ServiceStatus {
                context: "profile endpoint".to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| EngineError::Network {
            context: "reading profile body".to_string(),
            source: e,
        })?;
        let profile = UserProfile::from_json_str(&body)?;
        Ok(Some(profile))
    }
}

// ============================================================================
// Static provider — for tests and offline runs
// ============================================================================

pub struct StaticProfileProvider {
    profile: Option<UserProfile>,
}

impl StaticProfileProvider {
    pub fn signed_in(profile: UserProfile) -> Self {
        StaticProfileProvider {
            profile: Some(profile),
        }
    }

    pub fn signed_out() -> Self {
        StaticProfileProvider { profile: None }
    }
}

impl ProfileProvider for StaticProfileProvider {
    fn fetch(&self) -> Result<Option<UserProfile>, EngineError> {
        Ok(self.profile.clone())
    }
}
