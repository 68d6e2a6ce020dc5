//! Feature entity and feature kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QuarryError, Result};
use crate::model::{Language, Severity};

/// The closed classification of a harvested feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Inspection with a configurable severity.
    ConfigInspection,

    /// Inspection with a fixed (non-configurable) severity.
    StaticInspection,

    /// Context action.
    ContextAction,

    /// Quick fix.
    QuickFix,

    /// Quick fix that can be applied in a wider scope.
    FixInScope,

    /// Context action that can be applied in a wider scope.
    ContextActionInScope,

    /// Inspection known to have at least one quick fix.
    InspectionWithQuickFix,
}

impl FeatureKind {
    /// All kinds in the fixed merge order used by a harvesting session.
    pub const ALL: [FeatureKind; 7] = [
        FeatureKind::ConfigInspection,
        FeatureKind::StaticInspection,
        FeatureKind::ContextAction,
        FeatureKind::QuickFix,
        FeatureKind::FixInScope,
        FeatureKind::ContextActionInScope,
        FeatureKind::InspectionWithQuickFix,
    ];

    /// Stable node name used in the catalog document.
    pub fn node_name(self) -> &'static str {
        match self {
            FeatureKind::ConfigInspection => "ConfigInspection",
            FeatureKind::StaticInspection => "StaticInspection",
            FeatureKind::ContextAction => "ContextAction",
            FeatureKind::QuickFix => "QuickFix",
            FeatureKind::FixInScope => "FixInScope",
            FeatureKind::ContextActionInScope => "ContextActionInScope",
            FeatureKind::InspectionWithQuickFix => "InspectionWithQuickFix",
        }
    }

    /// Human-readable title used in CLI summaries.
    pub fn title(self) -> &'static str {
        match self {
            FeatureKind::ConfigInspection => "Configurable inspections",
            FeatureKind::StaticInspection => "Static inspections",
            FeatureKind::ContextAction => "Context actions",
            FeatureKind::QuickFix => "Quick fixes",
            FeatureKind::FixInScope => "Fixes in scope",
            FeatureKind::ContextActionInScope => "Context actions in scope",
            FeatureKind::InspectionWithQuickFix => "Inspections with quick fixes",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node_name())
    }
}

/// One harvested capability instance: one kind, one language, one id.
///
/// Identity is `(kind, id, lang)`. Two features agreeing on that triple are
/// the same feature instance, and catalogs never hold both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Stable identifier, unique within a (kind, language) pair.
    pub id: String,

    /// Human-readable title. Falls back to `id` when the source had none.
    pub text: String,

    /// The single language this instance is attributed to.
    pub lang: Language,

    /// Full set of languages the underlying capability supports.
    /// Always a superset of `{lang}`.
    #[serde(default)]
    pub multilang: Vec<Language>,

    /// Classification of this feature.
    pub kind: FeatureKind,

    /// Default severity, for inspection kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Group/category id, for inspection kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Fully-qualified name of the underlying type, where known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound_name: Option<String>,

    /// EditorConfig property this inspection maps to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorconfig_id: Option<String>,

    /// Ids of related features (e.g. sibling severities).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_ids: Vec<String>,

    /// Free-form tags used by the tag index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Feature {
    /// Create a feature.
    ///
    /// Rejects an empty or whitespace-only id: that is the one identity
    /// invariant that must never be silently repaired.
    pub fn new(kind: FeatureKind, id: impl Into<String>, lang: Language) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(QuarryError::InvalidFeature {
                message: format!("{} feature with empty id", kind),
            });
        }
        Ok(Self {
            text: id.clone(),
            multilang: vec![lang.clone()],
            id,
            lang,
            kind,
            severity: None,
            group_id: None,
            compound_name: None,
            editorconfig_id: None,
            related_ids: Vec::new(),
            tags: Vec::new(),
        })
    }

    /// Set the display text. Empty text keeps the id-derived default.
    pub fn with_text(mut self, text: &str) -> Self {
        if !text.trim().is_empty() {
            self.text = text.to_string();
        }
        self
    }

    /// Set the full supported-language set. The attributed language is
    /// always retained as a member.
    pub fn with_multilang(mut self, langs: Vec<Language>) -> Self {
        let mut langs = langs;
        if !langs.contains(&self.lang) {
            langs.insert(0, self.lang.clone());
        }
        self.multilang = langs;
        self
    }

    /// Set the default severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the group id.
    pub fn with_group(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
        self
    }

    /// Set the fully-qualified type name.
    pub fn with_compound_name(mut self, name: &str) -> Self {
        self.compound_name = Some(name.to_string());
        self
    }

    /// Set the EditorConfig property id.
    pub fn with_editorconfig_id(mut self, id: &str) -> Self {
        self.editorconfig_id = Some(id.to_string());
        self
    }

    /// Set related feature ids.
    pub fn with_related_ids(mut self, ids: Vec<String>) -> Self {
        self.related_ids = ids;
        self
    }

    /// Set free-form tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Re-attribute a copy of this feature to another language.
    pub fn for_language(&self, lang: Language) -> Self {
        let mut copy = self.clone();
        if !copy.multilang.contains(&lang) {
            copy.multilang.push(lang.clone());
        }
        copy.lang = lang;
        copy
    }

    /// Copy of this feature reclassified under another kind.
    ///
    /// Used by the cross-index pass, which re-files existing inspection
    /// features under the inspection-with-quick-fix kind.
    pub fn as_kind(&self, kind: FeatureKind) -> Self {
        let mut copy = self.clone();
        copy.kind = kind;
        copy
    }

    /// The `(kind, id, lang)` identity key.
    pub fn key(&self) -> (FeatureKind, &str, &Language) {
        (self.kind, &self.id, &self.lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_feature_defaults_text_to_id() {
        let f = Feature::new(FeatureKind::QuickFix, "RemoveBraces", Language::csharp()).unwrap();
        assert_eq!(f.text, "RemoveBraces");
        assert_eq!(f.multilang, vec![Language::csharp()]);
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = Feature::new(FeatureKind::QuickFix, "", Language::csharp());
        assert!(err.is_err());
        let err = Feature::new(FeatureKind::QuickFix, "   ", Language::csharp());
        assert!(err.is_err());
    }

    #[test]
    fn with_text_ignores_blank() {
        let f = Feature::new(FeatureKind::QuickFix, "X", Language::csharp())
            .unwrap()
            .with_text("  ");
        assert_eq!(f.text, "X");
        let f = f.with_text("Remove braces");
        assert_eq!(f.text, "Remove braces");
    }

    #[test]
    fn with_multilang_keeps_attributed_language() {
        let f = Feature::new(FeatureKind::ConfigInspection, "CS0108", Language::csharp())
            .unwrap()
            .with_multilang(vec![Language::vbnet()]);
        assert!(f.multilang.contains(&Language::csharp()));
        assert!(f.multilang.contains(&Language::vbnet()));
    }

    #[test]
    fn for_language_reattributes_copy() {
        let f = Feature::new(FeatureKind::StaticInspection, "X", Language::csharp()).unwrap();
        let copy = f.for_language(Language::vbnet());
        assert_eq!(copy.lang, Language::vbnet());
        assert_eq!(f.lang, Language::csharp());
        assert!(copy.multilang.contains(&Language::vbnet()));
    }

    #[test]
    fn as_kind_reclassifies_copy() {
        let f = Feature::new(FeatureKind::StaticInspection, "X", Language::csharp()).unwrap();
        let copy = f.as_kind(FeatureKind::InspectionWithQuickFix);
        assert_eq!(copy.kind, FeatureKind::InspectionWithQuickFix);
        assert_eq!(copy.id, "X");
        assert_eq!(f.kind, FeatureKind::StaticInspection);
    }

    #[test]
    fn kind_node_names_are_stable() {
        assert_eq!(FeatureKind::ConfigInspection.node_name(), "ConfigInspection");
        assert_eq!(
            FeatureKind::InspectionWithQuickFix.node_name(),
            "InspectionWithQuickFix"
        );
    }

    #[test]
    fn all_kinds_are_distinct() {
        let mut names: Vec<&str> = FeatureKind::ALL.iter().map(|k| k.node_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FeatureKind::ALL.len());
    }
}
