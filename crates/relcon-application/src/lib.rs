//! Application Layer - Relcon
//!
//! Use cases that orchestrate the domain ports:
//!
//! - [`SimilarityEngine`](use_cases::SimilarityEngine): embed, link, read
//! - [`SyncQueue`](use_cases::SyncQueue) and
//!   [`SyncTriggers`](use_cases::SyncTriggers): when to sync
//! - [`BulkRunner`](use_cases::BulkRunner): backfills and rebuilds
//!
//! ## Ports
//!
//! - `ports::registry`: linkme registry of embedding providers
//! - `ports::services`: service interfaces and the content source
//!
//! This crate depends only on `relcon-domain` plus async and serialization
//! libraries. Concrete providers live in `relcon-providers`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
