//! JSON Lines content source

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use relcon_application::ports::services::ContentSource;
use relcon_domain::entities::ContentItem;
use relcon_domain::error::{Error, Result};

/// Reads content items from a JSON Lines file
///
/// Blank lines are ignored. A malformed line fails the whole read with its
/// line number.
#[derive(Debug, Clone)]
pub struct JsonlContentSource {
    path: PathBuf,
}

impl JsonlContentSource {
    /// Source backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Input file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every item in the file, in file order
    pub async fn load_all(&self) -> Result<Vec<ContentItem>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read {}", self.path.display()), e)
        })?;
        parse_lines(&content)
    }
}

fn parse_lines(content: &str) -> Result<Vec<ContentItem>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                Error::invalid_argument(format!("Invalid content item on line {}: {e}", index + 1))
            })
        })
        .collect()
}

#[async_trait]
impl ContentSource for JsonlContentSource {
    async fn items(&self, content_type: &str) -> Result<Vec<ContentItem>> {
        let items: Vec<ContentItem> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|item| item.content_type == content_type)
            .collect();
        debug!(path = %self.path.display(), content_type, count = items.len(), "Loaded content items");
        Ok(items)
    }
}
