use serde::Deserialize;

/// JSON body returned by `GET /api/auth/verify-email/{token}`.
///
/// The service sets `message` on success and `error` on failure. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyEmailResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VerifyEmailResponse {
    pub fn message(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }

    pub fn error(&self) -> Option<&str> {
        non_blank(self.error.as_deref())
    }
}

/// A 2xx reply from the verification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    pub message: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
