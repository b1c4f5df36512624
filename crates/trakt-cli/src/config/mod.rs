//! Application configuration module.
//!
//! Locates and manages the TOML config file holding the Trakt application
//! credentials and the stored OAuth token.

#[allow(clippy::module_inception)]
mod config;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
