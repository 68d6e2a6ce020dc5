//! Harvest configuration (`quarry.yml`).
//!
//! The config file is optional; every field has a default that matches the
//! stock platform. It exists so operators can extend the category fallback
//! table and the name-marker table when the host loads third-party language
//! bindings Quarry does not know about.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{QuarryError, Result};
use crate::model::Language;
use crate::registry::CategoryLanguages;

/// Default file name looked up next to the universe snapshot.
pub const CONFIG_FILE_NAME: &str = "quarry.yml";

/// One extra substring-to-language marker entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameMarker {
    /// Substring matched against fully-qualified type names.
    pub marker: String,

    /// Language attributed when the marker matches.
    pub language: Language,
}

/// Harvest configuration loaded from `quarry.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarvestConfig {
    /// Product label rendered into the tag index.
    #[serde(default = "default_product")]
    pub product: String,

    /// Include internal-only severity configurations.
    #[serde(default)]
    pub include_internal: bool,

    /// Language excluded from the tag index (the platform variant not
    /// covered by it).
    #[serde(default = "default_excluded_tag_language")]
    pub excluded_tag_language: Language,

    /// Category fallback entries merged over the built-in table.
    #[serde(default)]
    pub category_languages: BTreeMap<String, Vec<Language>>,

    /// Extra name-marker entries checked before the built-in markers.
    #[serde(default)]
    pub name_markers: Vec<NameMarker>,
}

fn default_product() -> String {
    "Platform".to_string()
}

fn default_excluded_tag_language() -> Language {
    Language::cpp()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            include_internal: false,
            excluded_tag_language: default_excluded_tag_language(),
            category_languages: BTreeMap::new(),
            name_markers: Vec::new(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| QuarryError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `quarry.yml` from `dir` if present, else defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading harvest config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The category fallback table with config overrides applied.
    pub fn category_table(&self) -> CategoryLanguages {
        let mut table = CategoryLanguages::defaults();
        table.apply_overrides(&self.category_languages);
        table
    }
}
