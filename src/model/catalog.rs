//! In-memory collection of features of one kind.

use std::collections::HashSet;

use crate::model::{Feature, FeatureKind, Language};

/// An ordered collection of [`Feature`]s of a single kind.
///
/// Insertion enforces the `(kind, id, lang)` uniqueness invariant: inserting
/// a feature whose key is already present is a no-op. Languages are tracked
/// in first-seen order; all presentation queries sort before returning, so
/// discovery order never leaks into emitted output.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    kind: FeatureKind,
    features: Vec<Feature>,
    languages: Vec<Language>,
    seen: HashSet<(String, Language)>,
}

/// One category bucket produced by [`FeatureCatalog::grouped_by_category`].
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub group_id: String,
    pub title: String,
    pub features: Vec<&'a Feature>,
}

impl FeatureCatalog {
    /// Create an empty catalog for one feature kind.
    pub fn new(kind: FeatureKind) -> Self {
        Self {
            kind,
            features: Vec::new(),
            languages: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// The kind every feature in this catalog has.
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Insert a feature, returning whether it was actually added.
    ///
    /// A feature whose `(id, lang)` is already present is silently dropped.
    /// Features of a foreign kind are a caller bug and are dropped too.
    pub fn insert(&mut self, feature: Feature) -> bool {
        if feature.kind != self.kind {
            tracing::warn!(
                kind = %feature.kind,
                catalog = %self.kind,
                id = %feature.id,
                "dropping feature of foreign kind"
            );
            return false;
        }
        let key = (feature.id.clone(), feature.lang.clone());
        if !self.seen.insert(key) {
            return false;
        }
        if !self.languages.contains(&feature.lang) {
            self.languages.push(feature.lang.clone());
        }
        self.features.push(feature);
        true
    }

    /// Whether a feature with this id and language is already present.
    pub fn contains(&self, id: &str, lang: &Language) -> bool {
        self.seen.contains(&(id.to_string(), lang.clone()))
    }

    /// All features, in insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Distinct languages in first-seen order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the catalog holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Sort the backing feature list by display text.
    ///
    /// The versioned store records features in the catalog's existing
    /// order, so sessions sort each catalog once before merging.
    pub fn sort_by_text(&mut self) {
        self.features.sort_by(|a, b| a.text.cmp(&b.text));
    }

    /// Features attributed to `lang`, sorted by display text.
    pub fn for_language(&self, lang: &Language) -> Vec<&Feature> {
        let mut matched: Vec<&Feature> =
            self.features.iter().filter(|f| &f.lang == lang).collect();
        matched.sort_by(|a, b| a.text.cmp(&b.text));
        matched
    }

    /// Features whose full language set includes `lang`, sorted by text.
    pub fn implementing_language(&self, lang: &Language) -> Vec<&Feature> {
        let mut matched: Vec<&Feature> = self
            .features
            .iter()
            .filter(|f| f.multilang.contains(lang))
            .collect();
        matched.sort_by(|a, b| a.text.cmp(&b.text));
        matched
    }

    /// Features matching a fully-qualified type name.
    pub fn by_compound_name(&self, full_name: &str) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|f| f.compound_name.as_deref() == Some(full_name))
            .collect()
    }

    /// Features matching an id, across all languages.
    pub fn by_id(&self, id: &str) -> Vec<&Feature> {
        self.features.iter().filter(|f| f.id == id).collect()
    }

    /// Features bucketed by category, sorted by category title.
    ///
    /// `title_of` resolves a group id to its presentable title; unresolved
    /// groups fall back to the raw id. Features without a group id are
    /// omitted, as are (necessarily) empty groups.
    pub fn grouped_by_category(
        &self,
        title_of: impl Fn(&str) -> Option<String>,
    ) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for feature in &self.features {
            let Some(group_id) = feature.group_id.as_deref() else {
                continue;
            };
            match groups.iter_mut().find(|g| g.group_id == group_id) {
                Some(group) => group.features.push(feature),
                None => groups.push(CategoryGroup {
                    group_id: group_id.to_string(),
                    title: title_of(group_id).unwrap_or_else(|| group_id.to_string()),
                    features: vec![feature],
                }),
            }
        }
        for group in &mut groups {
            group.features.sort_by(|a, b| a.text.cmp(&b.text));
        }
        groups.sort_by(|a, b| a.title.cmp(&b.title));
        groups
    }
}
