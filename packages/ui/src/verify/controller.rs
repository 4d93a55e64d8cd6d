use api::{Verified, VerifyError};
use std::time::Duration;

/// How long the success screen stays up before sending the user to login.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

pub const LOGIN_PATH: &str = "/login";

pub const FALLBACK_ERROR_MESSAGE: &str = "Verification failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const FALLBACK_SUCCESS_MESSAGE: &str = "Email verified successfully.";

/// Where a verification attempt stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationState {
    Loading,
    Success(String),
    Error(String),
}

impl VerificationState {
    pub fn from_result(result: Result<Verified, VerifyError>) -> Self {
        match result {
            Ok(verified) => VerificationState::Success(
                verified
                    .message
                    .unwrap_or_else(|| FALLBACK_SUCCESS_MESSAGE.to_string()),
            ),
            Err(VerifyError::Rejected { error, .. }) => VerificationState::Error(
                error.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            ),
            Err(VerifyError::Transport(_)) => {
                VerificationState::Error(NETWORK_ERROR_MESSAGE.to_string())
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, VerificationState::Loading)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            VerificationState::Loading => None,
            VerificationState::Success(message) | VerificationState::Error(message) => {
                Some(message)
            }
        }
    }
}

/// Something that can take the user to the login view.
pub trait LoginRedirect {
    fn to_login(&self);
}

impl LoginRedirect for dioxus::router::Navigator {
    fn to_login(&self) {
        if let Some(failure) = self.push(LOGIN_PATH) {
            tracing::warn!("verify.redirect: navigation failed: {:?}", failure);
        }
    }
}

/// Owns one verification attempt for one token.
///
/// Moves from `Loading` to `Success` or `Error` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationController {
    token: String,
    state: VerificationState,
}

impl VerificationController {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            state: VerificationState::Loading,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Apply the outcome of the request.
    ///
    /// Returns the delay after which the caller should redirect to login, which only
    /// happens on the first, successful settle. Later calls leave the state untouched.
    pub fn settle(&mut self, result: Result<Verified, VerifyError>) -> Option<Duration> {
        if self.state.is_settled() {
            tracing::debug!("verify.settle: ignoring late outcome");
            return None;
        }

        if let Err(err) = &result {
            tracing::info!("verify.settle: failed: {}", err);
        }
        self.state = VerificationState::from_result(result);

        match self.state {
            VerificationState::Success(_) => {
                tracing::info!("verify.settle: verified token_len={}", self.token.len());
                Some(LOGIN_REDIRECT_DELAY)
            }
            _ => None,
        }
    }

    /// The error screen's "go to login" button. Does nothing in other states.
    pub fn acknowledge(&self, navigator: &impl LoginRedirect) -> bool {
        if !matches!(self.state, VerificationState::Error(_)) {
            return false;
        }
        navigator.to_login();
        true
    }
}
