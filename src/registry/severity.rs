//! Severity/configuration registry records.

use serde::{Deserialize, Serialize};

use crate::model::{Language, Severity};

/// One configurable-severity entry as registered with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityConfiguration {
    /// Stable configuration id (doubles as the feature id).
    pub id: String,

    /// Presentable title.
    pub title: String,

    /// Free-text description. May embed an HTML hyperlink to documentation.
    #[serde(default)]
    pub description: String,

    /// Default severity of the inspection.
    pub default_severity: Severity,

    /// Group/category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Fully-qualified name of the backing type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_name: Option<String>,

    /// EditorConfig property this configuration maps to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editorconfig_id: Option<String>,

    /// Ids of related configurations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_ids: Vec<String>,

    /// When set, the displayed language replaces the implemented-language
    /// list entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_language: Option<Language>,

    /// Internal-only entries are skipped outside internal diagnostic mode.
    #[serde(default)]
    pub internal: bool,
}

/// Read access to the host's severity/configuration registry.
pub trait SeverityRegistry {
    /// Every registered severity configuration.
    fn configurations(&self) -> Vec<&SeverityConfiguration>;

    /// Languages the configuration with `id` is implemented for.
    fn implementations_for(&self, id: &str) -> Vec<Language>;
}
