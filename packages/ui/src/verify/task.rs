use super::controller::LoginRedirect;
use api::{VerificationService, Verified, VerifyError};
use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;

/// Receiving end of a verification request started by [`start_verification`].
#[derive(Debug)]
pub struct VerificationTask {
    rx: oneshot::Receiver<Result<Verified, VerifyError>>,
}

impl VerificationTask {
    /// A task whose outcome is already known, e.g. when the client could not be built.
    pub fn ready(result: Result<Verified, VerifyError>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { rx }
    }

    /// `None` when the request was dropped before it finished.
    pub async fn outcome(self) -> Option<Result<Verified, VerifyError>> {
        self.rx.await.ok()
    }
}

/// Build the single verification request for `token`.
///
/// The returned future performs the request and reports through the task's channel.
/// If the task has been dropped by then the outcome is discarded.
pub fn start_verification<S>(
    service: S,
    token: String,
) -> (impl Future<Output = ()>, VerificationTask)
where
    S: VerificationService + 'static,
{
    let (tx, rx) = oneshot::channel();
    let request = async move {
        let result = service.verify_email(&token).await;
        if tx.send(result).is_err() {
            tracing::debug!("verify.request: page gone before outcome, discarding");
        }
    };
    (request, VerificationTask { rx })
}

/// Wait `delay`, then send the user to login. Dropping the future first cancels the redirect.
pub async fn redirect_to_login_after<N: LoginRedirect>(delay: Duration, navigator: N) {
    sleep(delay).await;
    tracing::debug!("verify.redirect: to login");
    navigator.to_login();
}

/// The page's side of one attempt: wait for the outcome, hand it to `settle`, and
/// redirect after the delay `settle` asks for.
///
/// Does nothing if the request went away before answering.
pub async fn finish_verification<F, N>(task: VerificationTask, settle: F, redirect: N)
where
    F: FnOnce(Result<Verified, VerifyError>) -> Option<Duration>,
    N: LoginRedirect,
{
    let Some(outcome) = task.outcome().await else {
        tracing::debug!("verify.request: dropped before answering, staying on loading");
        return;
    };
    if let Some(delay) = settle(outcome) {
        redirect_to_login_after(delay, redirect).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}
