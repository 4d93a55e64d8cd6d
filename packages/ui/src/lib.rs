//! This crate contains all shared UI for the workspace.

mod theme;
pub use theme::CampusTheme;

mod login;
pub use login::LoginPage;

pub mod verify;
pub use verify::VerifyEmailPage;

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};
