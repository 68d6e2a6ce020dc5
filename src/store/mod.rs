//! Versioned catalog store: durable, append-only feature history.
//!
//! One store lifetime is one harvesting session: `open()` once, any number
//! of `merge()` calls, `close()` exactly once. The store is the only
//! mutable shared resource in Quarry and is owned by a single session;
//! concurrent sessions against the same file must be serialized by the
//! operator.

pub mod document;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QuarryError, Result};
use crate::model::{FeatureCatalog, FeatureKind};

pub use document::{
    CatalogDocument, FeatureEntry, KindList, KindStats, LanguageNode, VersionNode,
};

/// Counters reported back to the caller after one merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub kind: FeatureKind,

    /// Features visited this session, duplicates included.
    pub total: usize,

    /// Features first recorded in the current version.
    pub new: usize,
}

/// Load a catalog document read-only, without starting a session.
///
/// Used by reporting commands that must not create a version node.
pub fn load_document(path: &Path) -> Result<CatalogDocument> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| QuarryError::StoreCorrupt {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The keeper of the versioned catalog document.
pub struct CatalogStore {
    path: PathBuf,
    document: CatalogDocument,
    current_version: String,
}

impl CatalogStore {
    /// Open the store for one session.
    ///
    /// Loads the persisted document when present; a document that exists
    /// but cannot be parsed is fatal and propagated, never overwritten.
    /// The node for `version` is created and placed first among version
    /// nodes if it does not exist yet.
    pub fn open(path: &Path, version: &str) -> Result<Self> {
        let document = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| QuarryError::StoreCorrupt {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            CatalogDocument::default()
        };

        let mut store = Self {
            path: path.to_path_buf(),
            document,
            current_version: version.to_string(),
        };
        if store.document.version(version).is_none() {
            tracing::info!(version, "creating version node");
            store
                .document
                .versions
                .insert(0, VersionNode::new(version));
        }
        Ok(store)
    }

    /// The version this session records under.
    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Read access to the whole document.
    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }

    /// Merge one harvested catalog into the current version node.
    ///
    /// A feature id already recorded for this `(kind, language)` under any
    /// version is never re-recorded; only unseen ids are appended under the
    /// current version. A language whose current-version node already
    /// carries this kind is skipped entirely, so a kind merges at most once
    /// per version per run. Statistics are first-writer-wins per kind per
    /// version.
    pub fn merge(&mut self, catalog: &FeatureCatalog) -> MergeOutcome {
        let kind = catalog.kind();
        let mut session_total = 0usize;
        let mut session_new = 0usize;

        for lang in catalog.languages().to_vec() {
            let historical: HashSet<String> = self
                .document
                .recorded_ids(kind, &lang)
                .into_iter()
                .map(str::to_string)
                .collect();
            let historical_count = historical.len();

            let already_populated = self
                .document
                .version(&self.current_version)
                .and_then(|node| node.language(&lang))
                .and_then(|node| node.kind_list(kind))
                .is_some();
            if already_populated {
                tracing::debug!(%kind, %lang, "kind already populated this version; skipping");
                continue;
            }

            let mut new_entries: Vec<FeatureEntry> = Vec::new();
            for feature in catalog.features().iter().filter(|f| f.lang == lang) {
                session_total += 1;
                if historical.contains(&feature.id) {
                    continue;
                }
                new_entries.push(FeatureEntry {
                    id: feature.id.clone(),
                    text: feature.text.clone(),
                });
                session_new += 1;
            }

            if new_entries.is_empty() {
                continue;
            }
            let list = KindList {
                kind,
                total: historical_count + new_entries.len(),
                new: new_entries.len(),
                features: new_entries,
            };
            self.attach_kind_list(&lang, list);
        }

        let version = self
            .document
            .versions
            .iter_mut()
            .find(|node| node.version == self.current_version)
            .expect("current version node exists after open()");
        if version.statistics_for(kind).is_none() {
            version.statistics.push(KindStats {
                kind,
                total: session_total,
                new: session_new,
            });
        }

        MergeOutcome {
            kind,
            total: session_total,
            new: session_new,
        }
    }

    fn attach_kind_list(&mut self, lang: &crate::model::Language, list: KindList) {
        let version = self
            .document
            .versions
            .iter_mut()
            .find(|node| node.version == self.current_version)
            .expect("current version node exists after open()");
        match version.languages.iter_mut().find(|node| &node.lang == lang) {
            Some(node) => node.kinds.push(list),
            None => version.languages.push(LanguageNode {
                lang: lang.clone(),
                kinds: vec![list],
            }),
        }
    }

    /// Persist the document and end the session.
    ///
    /// Consuming `self` is what enforces the flush-once contract. Uses the
    /// write-to-temp-then-rename pattern so a crash mid-write can never
    /// corrupt the history.
    pub fn close(self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.document).map_err(|e| {
            QuarryError::StoreSerialize {
                message: e.to_string(),
            }
        })?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;
        tracing::info!(path = %self.path.display(), "catalog store flushed");
        Ok(())
    }
}
