use dioxus::prelude::*;

const LANG_STORAGE_KEY: &str = "campuskart_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::En);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
            (function(){{
              try {{
                const saved = localStorage.getItem("{LANG_STORAGE_KEY}");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              }} catch(e) {{}}
              try {{ return (navigator.language || "en"); }} catch(e) {{}}
              return "en";
            }})()
            "#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n.use_lang: missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

/// Switch language and remember the choice in localStorage.
pub fn set_lang(mut current: Signal<Lang>, lang: Lang) {
    current.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{LANG_STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to English if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav / common
        (Lang::En, "app.name") => "CampusKart".to_string(),
        (Lang::En, "nav.login") => "Log in".to_string(),
        (Lang::Fr, "nav.login") => "Connexion".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),
        (Lang::Fr, "lang.label") => "Langue".to_string(),

        // Email verification
        (Lang::En, "verify.loading.title") => "Verifying your email…".to_string(),
        (Lang::Fr, "verify.loading.title") => "Vérification de votre e-mail…".to_string(),
        (Lang::En, "verify.loading.body") => "This only takes a moment.".to_string(),
        (Lang::Fr, "verify.loading.body") => "Cela ne prend qu'un instant.".to_string(),
        (Lang::En, "verify.success.title") => "Email verified".to_string(),
        (Lang::Fr, "verify.success.title") => "E-mail vérifié".to_string(),
        (Lang::En, "verify.success.redirecting") => "Taking you to the login page…".to_string(),
        (Lang::Fr, "verify.success.redirecting") => "Redirection vers la page de connexion…".to_string(),
        (Lang::En, "verify.error.title") => "Couldn't verify your email".to_string(),
        (Lang::Fr, "verify.error.title") => "Impossible de vérifier votre e-mail".to_string(),
        (Lang::En, "verify.error.cta") => "Go to login".to_string(),
        (Lang::Fr, "verify.error.cta") => "Aller à la connexion".to_string(),

        // Login
        (Lang::En, "login.title") => "Log in".to_string(),
        (Lang::Fr, "login.title") => "Connexion".to_string(),
        (Lang::En, "login.body") => "Sign in with your campus email to start buying and selling.".to_string(),
        (Lang::Fr, "login.body") => "Connectez-vous avec votre e-mail universitaire pour acheter et vendre.".to_string(),

        // Fallback: use English string if present, else show key.
        (Lang::Fr, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}
