//! Calendar Cache: composed daily records keyed by `(date, sign, lang)`.
//!
//! Two tiers: an in-process `DashMap`, then JSON files under
//! `<root>/<date>/<sign>.<lang>.json`. Disk hits populate memory. Entries are never
//! purged; a new date is simply a new key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::content::composer::DailyContent;
use crate::content::locale::Lang;
use crate::content::tables::Sign;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache entry at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub date: String,
    pub sign: Sign,
    pub lang: Lang,
}

impl CacheKey {
    pub fn new(date: impl Into<String>, sign: Sign, lang: Lang) -> Self {
        Self {
            date: date.into(),
            sign,
            lang,
        }
    }

    /// Path of this entry relative to the cache root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.date).join(format!("{}.{}.json", self.sign.id(), self.lang.code()))
    }
}

/// One stored record. `rich` is the anonymous (unpersonalized) composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedDaily {
    pub date: String,
    pub sign: Sign,
    pub lang: Lang,
    pub generated_at: DateTime<Utc>,
    pub rich: DailyContent,
}

impl CachedDaily {
    pub fn new(rich: DailyContent) -> Self {
        Self {
            date: rich.date.clone(),
            sign: rich.sign,
            lang: rich.lang,
            generated_at: Utc::now(),
            rich,
        }
    }

    pub fn key(&self) -> CacheKey {
        CacheKey::new(self.date.clone(), self.sign, self.lang)
    }
}

/// The cache service injected into route handlers.
///
/// Carried in `AppState` as `Arc<dyn DailyCache>`.
#[async_trait]
pub trait DailyCache: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Option<CachedDaily>;

    /// Stores the entry. Persistence failures are logged, never returned.
    async fn put(&self, entry: CachedDaily);
}

// ────────────────────────────────────────────────────────────────────────────
// TieredCache: memory first, then files
// ────────────────────────────────────────────────────────────────────────────

pub struct TieredCache {
    root: PathBuf,
    memory: DashMap<CacheKey, CachedDaily>,
}

impl TieredCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            memory: DashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.relative_path())
    }

    async fn read_file(&self, key: &CacheKey) -> Result<Option<CachedDaily>, CacheError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CacheError::Corrupt { path, source })
    }

    async fn write_file(&self, entry: &CachedDaily) -> Result<(), CacheError> {
        let path = self.path_for(&entry.key());
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| CacheError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }
        let bytes = serde_json::to_vec_pretty(entry).map_err(|source| CacheError::Corrupt {
            path: path.clone(),
            source,
        })?;
        // Write-then-rename so a concurrent reader never sees a half-written file.
        let tmp = path.with_extension(format!("json.{}.tmp", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| CacheError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| CacheError::Io { path, source })
    }
}

#[async_trait]
impl DailyCache for TieredCache {
    async fn get(&self, key: &CacheKey) -> Option<CachedDaily> {
        if let Some(hit) = self.memory.get(key) {
            debug!(date = %key.date, sign = %key.sign, lang = %key.lang, "cache hit (memory)");
            return Some(hit.value().clone());
        }

        match self.read_file(key).await {
            Ok(Some(entry)) => {
                debug!(date = %key.date, sign = %key.sign, lang = %key.lang, "cache hit (disk)");
                self.memory.insert(key.clone(), entry.clone());
                Some(entry)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable cache entry");
                None
            }
        }
    }

    async fn put(&self, entry: CachedDaily) {
        let key = entry.key();
        if let Err(e) = self.write_file(&entry).await {
            warn!(error = %e, "failed to persist cache entry; keeping it in memory only");
        }
        self.memory.insert(key, entry);
    }
}
