//! # Token Exchange Service Library
//!
//! Exchanges a caller-supplied bearer assertion for a downstream-scoped
//! access token through the identity provider's OAuth 2.0 On-Behalf-Of
//! flow, or refreshes a previously issued token. The service holds the
//! confidential client secret so browser and mobile callers never see it.
//!
//! Modules:
//! - `config` — environment-sourced service configuration
//! - `exchange` — request contract, validation, scope resolution, handlers
//! - `provider` — identity provider token endpoint client
//! - `server` — HTTP surface wiring

pub mod config;
pub mod exchange;
pub mod provider;
pub mod tests;
pub mod observability;
pub mod server;
pub mod utils;


pub use crate::config::settings::ServiceConfig;
pub use crate::exchange::models::TokenResponse;
