//! Typed metadata records describing the host's loaded types.

use serde::{Deserialize, Serialize};

use crate::model::{Language, Severity};

/// Metadata for one loaded type, as recorded by the host adapter.
///
/// All capability checks the harvester performs are plain predicates over
/// this record; Quarry never touches live reflection itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMetadata {
    /// Fully-qualified type name.
    pub full_name: String,

    /// Short type name (no namespace).
    pub short_name: String,

    /// Whether the type is an interface.
    #[serde(default)]
    pub is_interface: bool,

    /// Whether the type is abstract.
    #[serde(default)]
    pub is_abstract: bool,

    /// Whether the type implements the quick-fix capability.
    #[serde(default)]
    pub quick_fix: bool,

    /// Whether the type implements the scope-aware action capability.
    #[serde(default)]
    pub scope_aware: bool,

    /// Whether the type carries a static (fixed) severity classification.
    #[serde(default)]
    pub static_severity: bool,

    /// Whether the type carries a configurable severity classification.
    #[serde(default)]
    pub configurable_severity: bool,

    /// Default severity declared on the type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_severity: Option<Severity>,

    /// Group/category id declared on the type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Languages declared explicitly on the type. Often empty; the
    /// harvester then falls back to category and name-marker rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,

    /// Formatted tooltip string declared on the type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Display text obtained by the host's best-effort instantiation of the
    /// type. `None` means instantiation failed or was not attempted; the
    /// harvester falls back to a name-derived title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_text: Option<String>,

    /// Id of the severity configuration this type registers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_id: Option<String>,

    /// Free-form tags declared on the type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl TypeMetadata {
    /// Minimal record for a concrete, capability-less type.
    pub fn named(full_name: &str) -> Self {
        let short_name = full_name
            .rsplit('.')
            .next()
            .unwrap_or(full_name)
            .to_string();
        Self {
            full_name: full_name.to_string(),
            short_name,
            is_interface: false,
            is_abstract: false,
            quick_fix: false,
            scope_aware: false,
            static_severity: false,
            configurable_severity: false,
            default_severity: None,
            group_id: None,
            languages: Vec::new(),
            tooltip: None,
            probe_text: None,
            severity_id: None,
            tags: Vec::new(),
        }
    }
}

/// Diagnostic record for a loading unit whose types could not be enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSkip {
    /// Name of the loading unit.
    pub unit: String,

    /// Reason reported by the host.
    pub reason: String,
}

/// The per-unit enumeration result: the unit's types, or a recorded skip.
pub type UnitTypes<'a> = std::result::Result<(&'a str, &'a [TypeMetadata]), UnitSkip>;

/// A live view over the host's loaded types, partitioned by loading unit.
///
/// Enumerating one unit may fail without affecting the others; consumers
/// get a per-unit `Result` and are expected to record skips and continue.
pub trait TypeUniverse {
    /// All loading units, each either named types or a skip record.
    fn units(&self) -> Vec<UnitTypes<'_>>;
}
