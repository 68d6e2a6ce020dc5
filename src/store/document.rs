//! On-disk document model for the versioned catalog.
//!
//! The document is a plain hierarchy: root -> version nodes (newest first)
//! -> language nodes -> per-kind feature lists. It is append-only across
//! sessions: features are never relocated or removed, only added under the
//! session's current version node.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{FeatureKind, Language};

/// One recorded feature: the minimum the catalog history needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub id: String,
    pub text: String,
}

/// The feature list for one kind under one version/language node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindList {
    pub kind: FeatureKind,

    /// Cumulative known count for this kind+language as of this version.
    pub total: usize,

    /// Count first recorded in this version.
    pub new: usize,

    pub features: Vec<FeatureEntry>,
}

/// Per-language subtree of one version node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageNode {
    pub lang: Language,
    pub kinds: Vec<KindList>,
}

impl LanguageNode {
    pub fn kind_list(&self, kind: FeatureKind) -> Option<&KindList> {
        self.kinds.iter().find(|list| list.kind == kind)
    }
}

/// Session-level statistics for one kind within one version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindStats {
    pub kind: FeatureKind,

    /// Features visited across all languages this session.
    pub total: usize,

    /// Features first recorded in this version.
    pub new: usize,
}

/// One product version's partition of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionNode {
    pub version: String,

    /// When this version node was first created.
    pub recorded_at: DateTime<Utc>,

    #[serde(default)]
    pub languages: Vec<LanguageNode>,

    #[serde(default)]
    pub statistics: Vec<KindStats>,
}

impl VersionNode {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            recorded_at: Utc::now(),
            languages: Vec::new(),
            statistics: Vec::new(),
        }
    }

    pub fn language(&self, lang: &Language) -> Option<&LanguageNode> {
        self.languages.iter().find(|node| &node.lang == lang)
    }

    pub fn statistics_for(&self, kind: FeatureKind) -> Option<&KindStats> {
        self.statistics.iter().find(|stats| stats.kind == kind)
    }
}

/// The root document: version nodes, newest first at insertion time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub versions: Vec<VersionNode>,
}

impl CatalogDocument {
    pub fn version(&self, version: &str) -> Option<&VersionNode> {
        self.versions.iter().find(|node| node.version == version)
    }

    /// Ids recorded for `(kind, lang)` across the whole history.
    pub fn recorded_ids(&self, kind: FeatureKind, lang: &Language) -> Vec<&str> {
        let mut ids = Vec::new();
        for version in &self.versions {
            let Some(language) = version.language(lang) else {
                continue;
            };
            let Some(list) = language.kind_list(kind) else {
                continue;
            };
            ids.extend(list.features.iter().map(|f| f.id.as_str()));
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> FeatureEntry {
        FeatureEntry {
            id: id.to_string(),
            text: id.to_string(),
        }
    }

    fn node_with(version: &str, lang: Language, kind: FeatureKind, ids: &[&str]) -> VersionNode {
        let mut node = VersionNode::new(version);
        node.languages.push(LanguageNode {
            lang,
            kinds: vec![KindList {
                kind,
                total: ids.len(),
                new: ids.len(),
                features: ids.iter().map(|id| entry(id)).collect(),
            }],
        });
        node
    }

    #[test]
    fn recorded_ids_span_all_versions() {
        let doc = CatalogDocument {
            versions: vec![
                node_with(
                    "2.0",
                    Language::csharp(),
                    FeatureKind::ConfigInspection,
                    &["CS0999"],
                ),
                node_with(
                    "1.0",
                    Language::csharp(),
                    FeatureKind::ConfigInspection,
                    &["CS0108"],
                ),
            ],
        };

        let ids = doc.recorded_ids(FeatureKind::ConfigInspection, &Language::csharp());
        assert_eq!(ids, vec!["CS0999", "CS0108"]);
    }

    #[test]
    fn recorded_ids_are_scoped_to_kind_and_language() {
        let doc = CatalogDocument {
            versions: vec![node_with(
                "1.0",
                Language::csharp(),
                FeatureKind::ConfigInspection,
                &["CS0108"],
            )],
        };

        assert!(doc
            .recorded_ids(FeatureKind::StaticInspection, &Language::csharp())
            .is_empty());
        assert!(doc
            .recorded_ids(FeatureKind::ConfigInspection, &Language::vbnet())
            .is_empty());
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = CatalogDocument {
            versions: vec![node_with(
                "1.0",
                Language::csharp(),
                FeatureKind::QuickFix,
                &["RemoveBracesFix"],
            )],
        };
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let back: CatalogDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.versions.len(), 1);
        assert_eq!(back.versions[0].version, "1.0");
        let list = back.versions[0]
            .language(&Language::csharp())
            .unwrap()
            .kind_list(FeatureKind::QuickFix)
            .unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.features[0].id, "RemoveBracesFix");
    }
}
