use crate::config::ClientConfig;
use crate::types::{Verified, VerifyEmailResponse};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Why a verification attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// The service answered with a non-2xx status: the token is expired, invalid or already used.
    #[error("verification rejected (status {status}): {}", .error.as_deref().unwrap_or("no reason given"))]
    Rejected { status: u16, error: Option<String> },
    /// The request never completed, or its reply could not be read.
    #[error("transport error: {0}")]
    Transport(String),
}

/// The verification backend as seen from the page.
///
/// Futures are not `Send` so the same trait works on the browser's single thread.
#[async_trait(?Send)]
pub trait VerificationService {
    async fn verify_email(&self, token: &str) -> Result<Verified, VerifyError>;
}

/// `VerificationService` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpVerificationService {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpVerificationService {
    pub fn new(config: ClientConfig) -> Result<Self, VerifyError> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();

        // The browser fetch backend has no per-client timeout.
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| VerifyError::Transport(format!("client init failed: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait(?Send)]
impl VerificationService for HttpVerificationService {
    async fn verify_email(&self, token: &str) -> Result<Verified, VerifyError> {
        debug!("verify.request: token_len={}", token.len());
        let url = self.config.verify_email_url(token);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("verify.request: send failed: {}", e);
            VerifyError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!("verify.request: body read failed status={}", status.as_u16());
            VerifyError::Transport(e.to_string())
        })?;

        if status.is_success() {
            let message = parse_success_body(&body)?;
            info!("verify.request: verified status={}", status.as_u16());
            Ok(Verified { message })
        } else {
            let error = parse_error_body(&body);
            info!(
                "verify.request: rejected status={} has_error_text={}",
                status.as_u16(),
                error.is_some()
            );
            Err(VerifyError::Rejected {
                status: status.as_u16(),
                error,
            })
        }
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(|b| b.is_ascii_whitespace())
}

fn parse_success_body(body: &[u8]) -> Result<Option<String>, VerifyError> {
    if is_blank(body) {
        return Ok(None);
    }
    let parsed: VerifyEmailResponse = serde_json::from_slice(body).map_err(|e| {
        warn!("verify.request: malformed success body: {}", e);
        VerifyError::Transport(format!("invalid response body: {e}"))
    })?;
    Ok(parsed.message().map(str::to_string))
}

/// Rejections keep whatever error text can be salvaged; anything unreadable means "no text".
fn parse_error_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<VerifyEmailResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_may_be_empty() {
        assert_eq!(parse_success_body(b"").unwrap(), None);
        assert_eq!(parse_success_body(b"  \n").unwrap(), None);
    }

    #[test]
    fn success_body_must_be_json_when_present() {
        let err = parse_success_body(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, VerifyError::Transport(_)));
    }

    #[test]
    fn error_body_falls_back_to_none() {
        assert_eq!(parse_error_body(b""), None);
        assert_eq!(parse_error_body(b"Bad Request"), None);
        assert_eq!(parse_error_body(br#"{"message":"nope"}"#), None);
        assert_eq!(
            parse_error_body(br#"{"error":"Token expired"}"#).as_deref(),
            Some("Token expired")
        );
    }

    #[test]
    fn rejected_display_mentions_reason() {
        let err = VerifyError::Rejected {
            status: 400,
            error: Some("Token expired".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "verification rejected (status 400): Token expired"
        );
        let err = VerifyError::Rejected {
            status: 500,
            error: None,
        };
        assert!(err.to_string().contains("no reason given"));
    }
}
