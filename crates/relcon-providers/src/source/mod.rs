//! Content Source Implementations
//!
//! | Source | Input |
//! |--------|-------|
//! | JsonlContentSource | One `{"type", "id", "fields"}` object per line |

pub mod jsonl;

pub use jsonl::JsonlContentSource;
