//! Backend base-URL selection.
//!
//! The panel talks to a local backend while developed on `localhost` and to
//! a fixed remote host everywhere else. The choice is made once at start-up
//! from the page hostname.

/// Backend used when the panel is served from `localhost`.
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Backend used everywhere else.
pub const REMOTE_API_URL: &str = "https://api-supabase-back.onrender.com";

/// Candidate backend origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub local: String,
    pub remote: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            local: LOCAL_API_URL.to_string(),
            remote: REMOTE_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Replace the remote origin when `remote` is set and non-empty.
    #[must_use]
    pub fn with_remote_override(mut self, remote: Option<&str>) -> Self {
        if let Some(remote) = remote.map(str::trim).filter(|r| !r.is_empty()) {
            self.remote = remote.to_string();
        }
        self
    }

    /// Pick the backend origin for a page served from `hostname`.
    ///
    /// Trailing slashes are stripped so paths can be appended directly.
    #[must_use]
    pub fn select(&self, hostname: &str) -> &str {
        let base = if hostname.contains("localhost") {
            &self.local
        } else {
            &self.remote
        };
        base.trim_end_matches('/')
    }
}
