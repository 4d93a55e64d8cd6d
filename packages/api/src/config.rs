use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const BASE_URL_ENV: &str = "VERIFICATION_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "VERIFICATION_TIMEOUT_SECS";

/// Where the verification service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` keeps the transport's own default.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            base_url,
            request_timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// `{base}/api/auth/verify-email/{token}`, with the token encoded as a single path segment.
    pub fn verify_email_url(&self, token: &str) -> String {
        format!(
            "{}/api/auth/verify-email/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(token)
        )
    }
}

/// Load `.env` for local development. Missing files are fine.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("config.load_dotenv: loaded {}", path.display());
    }
}
