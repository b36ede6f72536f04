use serde::{Deserialize, Serialize};

/// Display metadata extracted from a product page.
///
/// `url` is always the URL the caller submitted, never a redirect target.
/// Fields the page does not provide serialize as JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absolute image URL; root-relative paths are resolved against the
    /// origin of `url` at extraction time.
    pub image: Option<String>,
    #[serde(default)]
    pub url: String,
}
