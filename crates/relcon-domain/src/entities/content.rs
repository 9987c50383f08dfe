//! Content identity and the embeddable capability

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EMBEDDABLE_FIELD_SEPARATOR;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static tag pattern compiles"));

/// Entity identity: a content type tag plus an opaque id
///
/// Used as the key of every embedding and as both endpoints of a
/// related link. Ordering is by type, then id, which gives stores a
/// deterministic tie-break.
///
/// ## Example
///
/// ```rust
/// use relcon_domain::ContentRef;
///
/// let post = ContentRef::new("post", "42");
/// assert_eq!(post.to_string(), "post:42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentRef {
    /// Type tag (e.g. `post`, `event`)
    pub content_type: String,
    /// Identifier, unique within the type
    pub content_id: String,
}

impl ContentRef {
    /// Create a new content reference
    pub fn new(content_type: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            content_id: content_id.into(),
        }
    }

    /// Whether this reference belongs to the given type
    pub fn is_type(&self, content_type: &str) -> bool {
        self.content_type == content_type
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.content_type, self.content_id)
    }
}

/// Capability for anything the engine can embed and link
///
/// An empty (after trim) `embeddable_text` means "nothing to embed";
/// the engine treats it as a successful skip.
pub trait Embeddable: Send + Sync {
    /// Stable identity of the item
    fn content_ref(&self) -> ContentRef;

    /// Text fed to the embedding provider
    fn embeddable_text(&self) -> String;
}

/// Plain content record carrying its embeddable fields
///
/// Fields are joined with a blank line after HTML tags are stripped;
/// empty fields are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Type tag
    #[serde(rename = "type")]
    pub content_type: String,
    /// Identifier within the type
    #[serde(rename = "id")]
    pub content_id: String,
    /// Ordered embeddable field values
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ContentItem {
    /// Create an item from its identity and field values
    pub fn new(
        content_type: impl Into<String>,
        content_id: impl Into<String>,
        fields: Vec<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            content_id: content_id.into(),
            fields,
        }
    }
}

impl Embeddable for ContentItem {
    fn content_ref(&self) -> ContentRef {
        ContentRef::new(&self.content_type, &self.content_id)
    }

    fn embeddable_text(&self) -> String {
        self.fields
            .iter()
            .map(|field| strip_tags(field))
            .filter(|field| !field.trim().is_empty())
            .collect::<Vec<_>>()
            .join(EMBEDDABLE_FIELD_SEPARATOR)
    }
}

/// Remove HTML/XML tags, keeping inner text
pub fn strip_tags(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}
