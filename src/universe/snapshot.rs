//! File-backed type universe loaded from a JSON snapshot.
//!
//! The host platform's adapter dumps everything harvesting needs into one
//! snapshot document: the loaded types partitioned by loading unit, the flat
//! context-action catalog, the severity configuration registry, and the
//! quick-fix association table. Quarry consumes the snapshot read-only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{QuarryError, Result};
use crate::model::{Feature, FeatureCatalog, FeatureKind, Language};
use crate::registry::{QuickFixIndex, SeverityConfiguration, SeverityRegistry};
use crate::universe::types::{TypeMetadata, TypeUniverse, UnitSkip, UnitTypes};

/// One loading unit in the snapshot: either its types, or an error the host
/// hit while enumerating them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotUnit {
    /// Unit (assembly/module) name.
    pub name: String,

    /// Enumeration error reported by the host, if the unit failed to load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Types the unit exposes. Empty when `error` is set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeMetadata>,
}

/// One entry of the separately-harvested flat context-action catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextActionEntry {
    /// Fully-qualified name of the action type.
    pub type_name: String,

    /// Display text of the action.
    pub text: String,

    /// Language the action is registered for.
    pub lang: Language,

    /// Free-form tags declared on the action.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The on-disk snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotDocument {
    /// Product label (used by the tag index).
    #[serde(default)]
    product: Option<String>,

    #[serde(default)]
    units: Vec<SnapshotUnit>,

    #[serde(default)]
    context_actions: Vec<ContextActionEntry>,

    #[serde(default)]
    severity_configurations: Vec<SeverityConfiguration>,

    /// Severity configuration id -> languages it is implemented for.
    #[serde(default)]
    severity_implementations: BTreeMap<String, Vec<Language>>,

    /// Quick fix full name -> full names of the inspections it fixes.
    #[serde(default)]
    quick_fix_associations: BTreeMap<String, Vec<String>>,
}

/// A [`TypeUniverse`] backed by a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotUniverse {
    doc: SnapshotDocument,
}

impl SnapshotUniverse {
    /// Load a snapshot from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuarryError::SnapshotNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let doc: SnapshotDocument =
            serde_json::from_str(&content).map_err(|e| QuarryError::SnapshotParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { doc })
    }

    /// Parse a snapshot from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SnapshotDocument =
            serde_json::from_str(json).map_err(|e| QuarryError::SnapshotParseError {
                path: "<inline>".into(),
                message: e.to_string(),
            })?;
        Ok(Self { doc })
    }

    /// Product label recorded in the snapshot, if any.
    pub fn product(&self) -> Option<&str> {
        self.doc.product.as_deref()
    }

    /// Build the flat context-action catalog carried in the snapshot.
    ///
    /// Feature ids hold the action's fully-qualified type name; the
    /// scoped-action pass cross-references them by that key.
    pub fn context_action_catalog(&self) -> FeatureCatalog {
        let mut catalog = FeatureCatalog::new(FeatureKind::ContextAction);
        for entry in &self.doc.context_actions {
            let feature = match Feature::new(
                FeatureKind::ContextAction,
                &entry.type_name,
                entry.lang.clone(),
            ) {
                Ok(f) => f
                    .with_text(&entry.text)
                    .with_compound_name(&entry.type_name)
                    .with_tags(entry.tags.clone()),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping context action with invalid id");
                    continue;
                }
            };
            catalog.insert(feature);
        }
        catalog
    }

    /// Build the quick-fix association index carried in the snapshot.
    pub fn quick_fix_index(&self) -> QuickFixIndex {
        QuickFixIndex::from_pairs(
            self.doc
                .quick_fix_associations
                .iter()
                .map(|(fix, inspections)| (fix.clone(), inspections.clone())),
        )
    }
}

impl TypeUniverse for SnapshotUniverse {
    fn units(&self) -> Vec<UnitTypes<'_>> {
        self.doc
            .units
            .iter()
            .map(|unit| match &unit.error {
                Some(reason) => Err(UnitSkip {
                    unit: unit.name.clone(),
                    reason: reason.clone(),
                }),
                None => Ok((unit.name.as_str(), unit.types.as_slice())),
            })
            .collect()
    }
}

impl SeverityRegistry for SnapshotUniverse {
    fn configurations(&self) -> Vec<&SeverityConfiguration> {
        self.doc.severity_configurations.iter().collect()
    }

    fn implementations_for(&self, id: &str) -> Vec<Language> {
        self.doc
            .severity_implementations
            .get(id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "product": "Platform 2024.2",
        "units": [
            {
                "name": "Platform.Core",
                "types": [
                    { "full_name": "Platform.Core.RemoveBracesFix", "short_name": "RemoveBracesFix", "quick_fix": true }
                ]
            },
            { "name": "Platform.Broken", "error": "could not load types" }
        ],
        "context_actions": [
            { "type_name": "Platform.Core.InvertIfAction", "text": "Invert 'if'", "lang": "C#" }
        ],
        "quick_fix_associations": {
            "Platform.Core.RemoveBracesFix": ["Platform.Core.RedundantBraces"]
        },
        "severity_implementations": {
            "RedundantBraces": ["C#", "VB.NET"]
        }
    }"#;

    #[test]
    fn load_missing_file_reports_not_found() {
        let err = SnapshotUniverse::load(Path::new("/nonexistent/universe.json"));
        assert!(matches!(err, Err(QuarryError::SnapshotNotFound { .. })));
    }

    #[test]
    fn broken_unit_yields_skip() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let units = universe.units();
        assert_eq!(units.len(), 2);
        assert!(units[0].is_ok());
        let skip = units[1].as_ref().unwrap_err();
        assert_eq!(skip.unit, "Platform.Broken");
        assert_eq!(skip.reason, "could not load types");
    }

    #[test]
    fn context_actions_become_flat_catalog() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let catalog = universe.context_action_catalog();
        assert_eq!(catalog.len(), 1);
        let matched = catalog.by_compound_name("Platform.Core.InvertIfAction");
        assert_eq!(matched[0].text, "Invert 'if'");
        assert_eq!(matched[0].lang, Language::csharp());
    }

    #[test]
    fn quick_fix_index_is_built_from_pairs() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let index = universe.quick_fix_index();
        assert_eq!(
            index.inspections_fixed_by("Platform.Core.RemoveBracesFix"),
            &["Platform.Core.RedundantBraces".to_string()]
        );
        assert!(index.inspections_fixed_by("Unknown").is_empty());
    }

    #[test]
    fn implementations_for_unknown_id_is_empty() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        assert!(universe.implementations_for("Nope").is_empty());
        assert_eq!(universe.implementations_for("RedundantBraces").len(), 2);
    }

    #[test]
    fn malformed_snapshot_is_a_parse_error() {
        let err = SnapshotUniverse::from_json("{ not json");
        assert!(matches!(err, Err(QuarryError::SnapshotParseError { .. })));
    }
}
