//! Durable store for the published product list.
//!
//! The list lives in a single JSON file. Every mutation runs under one async
//! mutex and commits by writing a sibling temp file and renaming it over the
//! store, so concurrent publishes never lose updates and a concurrent `list`
//! observes either the previous or the new file, never a partial write.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use page_meta::PageMeta;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

/// Errors that can occur while publishing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record to publish has no source URL.
    #[error("product is missing a source URL")]
    MissingUrl,

    /// Writing the updated list failed; the previously persisted list is
    /// intact.
    #[error("failed to persist published list: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the list failed.
    #[error("failed to encode published list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A product on the published list: extracted metadata plus assigned
/// identity and publish timestamp. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedProduct {
    /// UUIDv7 token: time-ordered and unique under concurrent publishes.
    pub id: String,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// File-backed publish store.
pub struct PublishStore {
    path: PathBuf,
    /// Serializes every read-modify-write cycle; `list` stays lock-free.
    write_lock: Mutex<()>,
}

impl PublishStore {
    /// Open a store at the given path, creating the parent directory if
    /// needed. The file itself appears on first publish.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// All published products, most recent first.
    ///
    /// A missing, unreadable or corrupt store file yields an empty list:
    /// a broken store never blocks listing.
    pub async fn list(&self) -> Vec<PublishedProduct> {
        Self::read_items(&self.path).await
    }

    /// Publish a metadata record: assign a fresh id, stamp `added_at` if the
    /// caller did not supply one, insert at the head of the list and persist
    /// the full list before returning.
    pub async fn publish(
        &self,
        meta: PageMeta,
        added_at: Option<DateTime<Utc>>,
    ) -> Result<PublishedProduct, StoreError> {
        if meta.url.is_empty() {
            return Err(StoreError::MissingUrl);
        }

        let _guard = self.write_lock.lock().await;

        let mut items = Self::read_items(&self.path).await;
        let product = PublishedProduct {
            id: Uuid::now_v7().to_string(),
            added_at: added_at.unwrap_or_else(Utc::now),
            meta,
        };
        items.insert(0, product.clone());
        self.write_items(&items).await?;

        Ok(product)
    }

    /// Health probe: distinguishes a working store from a corrupt or
    /// unreadable one, unlike `list` which fails open. Returns the current
    /// item count.
    pub async fn check(&self) -> Result<usize, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let items: Vec<PublishedProduct> = serde_json::from_slice(&bytes)?;
                Ok(items.len())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(err.into()),
        }
    }

    async fn read_items(path: &Path) -> Vec<PublishedProduct> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read store file");
                return Vec::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Store file is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Write the full list to a sibling temp file, then rename it over the
    /// store file. The rename is the commit point.
    async fn write_items(&self, items: &[PublishedProduct]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn sample_meta(url: &str) -> PageMeta {
        PageMeta {
            title: Some("Sample product".to_string()),
            description: Some("A product used in tests".to_string()),
            image: None,
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn list_on_fresh_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = PublishStore::open(dir.path().join("published.json")).unwrap();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn publish_inserts_at_head() {
        let dir = tempfile::tempdir().unwrap();
        let store = PublishStore::open(dir.path().join("published.json")).unwrap();

        let a = store
            .publish(sample_meta("https://shop.example/a"), None)
            .await
            .unwrap();
        let b = store
            .publish(sample_meta("https://shop.example/b"), None)
            .await
            .unwrap();

        let items = store.list().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, b.id);
        assert_eq!(items[1].id, a.id);
    }

    #[tokio::test]
    async fn published_items_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("published.json");

        {
            let store = PublishStore::open(&path).unwrap();
            store
                .publish(sample_meta("https://shop.example/a"), None)
                .await
                .unwrap();
        }

        let reopened = PublishStore::open(&path).unwrap();
        let items = reopened.list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].meta.url, "https://shop.example/a");
    }

    #[tokio::test]
    async fn missing_url_is_rejected_without_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("published.json");
        let store = PublishStore::open(&path).unwrap();

        store
            .publish(sample_meta("https://shop.example/a"), None)
            .await
            .unwrap();
        let before = tokio::fs::read(&path).await.unwrap();

        let err = store.publish(sample_meta(""), None).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingUrl));

        let after = tokio::fs::read(&path).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn corrupt_store_lists_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("published.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = PublishStore::open(&path).unwrap();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_store_recovers_on_publish() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("published.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = PublishStore::open(&path).unwrap();
        store
            .publish(sample_meta("https://shop.example/a"), None)
            .await
            .unwrap();

        let items = store.list().await;
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_publishes_all_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(PublishStore::open(dir.path().join("published.json")).unwrap());

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .publish(sample_meta(&format!("https://shop.example/p/{i}")), None)
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let items = store.list().await;
        assert_eq!(items.len(), 16);

        let ids: HashSet<String> = items.iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn caller_timestamp_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = PublishStore::open(dir.path().join("published.json")).unwrap();

        let stamp: DateTime<Utc> = "2026-01-02T03:04:05Z".parse().unwrap();
        let product = store
            .publish(sample_meta("https://shop.example/a"), Some(stamp))
            .await
            .unwrap();
        assert_eq!(product.added_at, stamp);

        let items = store.list().await;
        assert_eq!(items[0].added_at, stamp);
    }

    #[tokio::test]
    async fn check_reports_corruption_that_list_hides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("published.json");
        let store = PublishStore::open(&path).unwrap();

        assert_eq!(store.check().await.unwrap(), 0);

        tokio::fs::write(&path, b"{ not json").await.unwrap();
        assert!(store.check().await.is_err());
        assert!(store.list().await.is_empty());
    }

    #[test]
    fn wire_format_flattens_meta_and_uses_camel_case_timestamp() {
        let product = PublishedProduct {
            id: "test-id".to_string(),
            added_at: "2026-01-02T03:04:05Z".parse().unwrap(),
            meta: sample_meta("https://shop.example/a"),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "test-id");
        assert_eq!(json["addedAt"], "2026-01-02T03:04:05Z");
        assert_eq!(json["title"], "Sample product");
        assert_eq!(json["url"], "https://shop.example/a");
        assert!(json["image"].is_null());
    }
}
