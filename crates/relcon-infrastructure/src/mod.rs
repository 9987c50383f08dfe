//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that turn the domain and application
//! crates into a runnable system.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Provider selection and engine wiring |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Infrastructure defaults |

// Link the provider crate so its registry entries are present
extern crate relcon_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{RelconContext, create_embedding_provider, select_embedding_provider};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
