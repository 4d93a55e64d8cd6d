//! The email-verification landing page and the state machine behind it.

use api::{ClientConfig, HttpVerificationService};
use dioxus::prelude::*;

mod controller;
mod task;

pub use controller::{
    LoginRedirect, VerificationController, VerificationState, FALLBACK_ERROR_MESSAGE,
    FALLBACK_SUCCESS_MESSAGE, LOGIN_PATH, LOGIN_REDIRECT_DELAY, NETWORK_ERROR_MESSAGE,
};
pub use task::{
    finish_verification, redirect_to_login_after, start_verification, VerificationTask,
};

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Client settings for the platform we are running on.
///
/// Browser builds talk to a compile-time `VERIFICATION_API_BASE_URL` if one was set,
/// otherwise to the origin that served the page.
pub fn client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(base) = option_env!("VERIFICATION_API_BASE_URL") {
            return ClientConfig::default().with_base_url(base);
        }
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return ClientConfig::default().with_base_url(origin);
        }
    }
    ClientConfig::from_env()
}

/// Landing page for the link in a verification email.
///
/// Verifies `token` once per mount; callers key the page on the token so a new
/// token means a new mount. Both the request and the success redirect are
/// scoped to this component, so leaving the page cancels whatever is still pending.
#[component]
pub fn VerifyEmailPage(token: String) -> Element {
    let lang = crate::use_lang()();
    let nav = navigator();
    let mut controller = use_signal(move || VerificationController::new(token));

    // After mount so server rendering never sends the request.
    use_effect(move || {
        let token = controller.peek().token().to_string();
        spawn(async move {
            let task = match HttpVerificationService::new(client_config()) {
                Ok(service) => {
                    let (request, task) = start_verification(service, token);
                    spawn(request);
                    task
                }
                Err(err) => VerificationTask::ready(Err(err)),
            };
            finish_verification(
                task,
                move |outcome| controller.with_mut(|c| c.settle(outcome)),
                nav,
            )
            .await;
        });
    });

    let on_go_to_login = move |_| {
        controller.read().acknowledge(&nav);
    };

    let state = controller.read().state().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div { class: "verify_panel",
            match state {
                VerificationState::Loading => rsx! {
                    div { class: "verify_spinner", role: "status" }
                    h1 { {crate::t(lang, "verify.loading.title")} }
                    p { class: "hint", {crate::t(lang, "verify.loading.body")} }
                },
                VerificationState::Success(message) => rsx! {
                    div { class: "verify_icon success", "✓" }
                    h1 { {crate::t(lang, "verify.success.title")} }
                    p { "{message}" }
                    p { class: "hint", {crate::t(lang, "verify.success.redirecting")} }
                },
                VerificationState::Error(message) => rsx! {
                    div { class: "verify_icon error", "✕" }
                    h1 { {crate::t(lang, "verify.error.title")} }
                    p { class: "error", "{message}" }
                    button { class: "btn primary", onclick: on_go_to_login,
                        {crate::t(lang, "verify.error.cta")}
                    }
                },
            }
        }
    }
}
