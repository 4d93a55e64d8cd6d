use dioxus::prelude::*;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Where verification sends people. Signing in itself is handled elsewhere.
#[component]
pub fn LoginPage() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div { class: "verify_panel",
            h1 { {crate::t(lang, "login.title")} }
            p { class: "hint", {crate::t(lang, "login.body")} }
        }
    }
}
