//! Category-to-language fallback table.
//!
//! Quick fixes and inspections frequently declare no languages of their
//! own; their group/category id is then the only clue. This table maps a
//! group id to the languages its members are implemented for. Built-in
//! defaults cover the stock platform groups and can be extended or
//! overridden through `quarry.yml`.

use std::collections::BTreeMap;

use crate::model::Language;

/// Lookup table from group/category id to implemented languages.
#[derive(Debug, Clone)]
pub struct CategoryLanguages {
    table: BTreeMap<String, Vec<Language>>,
}

impl CategoryLanguages {
    /// The stock platform groups.
    pub fn defaults() -> Self {
        let mut table = BTreeMap::new();
        table.insert("CSharpErrors".to_string(), vec![Language::csharp()]);
        table.insert("VBNetErrors".to_string(), vec![Language::vbnet()]);
        table.insert("CppErrors".to_string(), vec![Language::cpp()]);
        table.insert("XamlErrors".to_string(), vec![Language::xaml()]);
        table.insert("HtmlErrors".to_string(), vec![Language::html()]);
        table.insert("CssErrors".to_string(), vec![Language::css()]);
        table.insert(
            "JsInspections".to_string(),
            vec![Language::javascript(), Language::typescript()],
        );
        table.insert(
            "CommonPractices".to_string(),
            vec![Language::csharp(), Language::vbnet()],
        );
        table.insert(
            "CodeRedundancy".to_string(),
            vec![Language::csharp(), Language::vbnet()],
        );
        Self { table }
    }

    /// An empty table (tests and exotic hosts).
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Languages for a group id, or `None` when the group is unknown.
    pub fn languages_for(&self, group_id: &str) -> Option<&[Language]> {
        self.table.get(group_id).map(Vec::as_slice)
    }

    /// Add or replace one group's language list.
    pub fn set(&mut self, group_id: &str, languages: Vec<Language>) {
        self.table.insert(group_id.to_string(), languages);
    }

    /// Merge override entries on top of the current table.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, Vec<Language>>) {
        for (group, langs) in overrides {
            self.table.insert(group.clone(), langs.clone());
        }
    }
}

impl Default for CategoryLanguages {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_stock_groups() {
        let table = CategoryLanguages::defaults();
        assert_eq!(
            table.languages_for("CSharpErrors"),
            Some(&[Language::csharp()][..])
        );
        assert!(table.languages_for("NoSuchGroup").is_none());
    }

    #[test]
    fn multi_language_group_returns_all() {
        let table = CategoryLanguages::defaults();
        let langs = table.languages_for("JsInspections").unwrap();
        assert!(langs.contains(&Language::javascript()));
        assert!(langs.contains(&Language::typescript()));
    }

    #[test]
    fn overrides_replace_entries() {
        let mut table = CategoryLanguages::defaults();
        let mut overrides = BTreeMap::new();
        overrides.insert("CSharpErrors".to_string(), vec![Language::common()]);
        overrides.insert("FSharpErrors".to_string(), vec![Language::new("F#")]);
        table.apply_overrides(&overrides);

        assert_eq!(
            table.languages_for("CSharpErrors"),
            Some(&[Language::common()][..])
        );
        assert_eq!(
            table.languages_for("FSharpErrors"),
            Some(&[Language::new("F#")][..])
        );
    }
}
