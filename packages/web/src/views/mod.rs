mod auth_verify;
pub use auth_verify::AuthVerify;

mod login;
pub use login::Login;
