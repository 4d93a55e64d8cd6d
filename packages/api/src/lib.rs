//! This crate contains the typed client for the CampusKart verification service.

pub mod config;
pub mod types;

mod verification;

#[cfg(test)]
mod types_tests;

pub use config::ClientConfig;
pub use types::{Verified, VerifyEmailResponse};
pub use verification::{HttpVerificationService, VerificationService, VerifyError};
