use dioxus::prelude::*;

#[component]
pub fn AuthVerify(token: String) -> Element {
    // Keyed so moving to another token remounts the page and verifies again.
    rsx! { ui::VerifyEmailPage { key: "{token}", token: token.clone() } }
}
