//! # relcon
//!
//! Related content through embedding similarity. Items are embedded,
//! linked to their nearest neighbors across content types, and the
//! resulting graph is read back in both directions.
//!
//! ## Example
//!
//! ```ignore
//! use relcon::infrastructure::{AppConfig, RelconContext};
//! use relcon::domain::{ContentItem, ContentRef};
//!
//! let context = RelconContext::build(AppConfig::default()).await?;
//! let service = context.service();
//! service.sync(&ContentItem::new("post", "1", vec!["Rust async".into()])).await?;
//! let related = service.get_related(&ContentRef::new("post", "1"), None).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, errors and ports
//! - `application` - similarity engine, sync queue, triggers, bulk runner
//! - `infrastructure` - configuration, logging, bootstrap
//! - `providers` - embedding providers, stores, event publishers
//! - `cli` - the `relcon` command line

/// Command line interface
pub mod cli;

/// Domain layer - core business logic and types
pub mod domain {
    pub use relcon_domain::*;
}

/// Application layer - use cases and service interfaces
pub mod application {
    pub use relcon_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use relcon_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use relcon_providers::*;
}
