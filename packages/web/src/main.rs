use dioxus::prelude::*;
use std::env;

use views::{AuthVerify, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/verify-email/:token")]
    AuthVerify { token: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    api::config::load_dotenv();

    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if installed.is_err() {
        eprintln!("startup: tracing subscriber already installed");
    }
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let client = api::ClientConfig::from_env();

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("startup: verification service={}", client.base_url);
    if let Some(timeout) = client.request_timeout {
        eprintln!("startup: verification timeout={}s", timeout.as_secs());
    }

    log_missing_envs("verification", &[api::config::BASE_URL_ENV]);
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).ok().is_none())
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs (using defaults): {}",
        missing.join(", ")
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::CampusTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared page chrome
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let lang_sig = ui::use_lang();
    let lang = lang_sig();

    rsx! {
        div { class: "app_nav",
            div { class: "app_nav_inner",
                Link { class: "brand", to: Route::Login {},
                    {ui::t(lang, "app.name")}
                }
                div { class: "nav_links",
                    span { class: "hint", {ui::t(lang, "lang.label")} }
                    button { class: "btn", onclick: move |_| ui::set_lang(lang_sig, ui::Lang::En), "EN" }
                    button { class: "btn", onclick: move |_| ui::set_lang(lang_sig, ui::Lang::Fr), "FR" }
                    Link { class: "btn primary", to: Route::Login {}, {ui::t(lang, "nav.login")} }
                }
            }
        }
        div { class: "app_container route_view", Outlet::<Route> {} }
    }
}
