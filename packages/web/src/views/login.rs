use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! { ui::LoginPage {} }
}
