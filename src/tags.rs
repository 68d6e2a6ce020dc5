//! Tag-indexed re-projection of harvested catalogs.
//!
//! Orthogonal to the versioned store: the index is rebuilt from scratch
//! every time and carries no history. Callers submit each catalog once per
//! build; the index does not deduplicate across calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{FeatureCatalog, FeatureKind, Language};

/// Bucket name for features that carry no tags.
pub const UNTAGGED_BUCKET: &str = "Other";

/// One feature's appearance in the tag index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagEntry {
    pub lang: Language,
    pub product: String,
    pub id: String,
    pub text: String,
}

/// Features grouped first by tag, then by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagIndex {
    pub tags: BTreeMap<String, BTreeMap<FeatureKind, Vec<TagEntry>>>,
}

impl TagIndex {
    /// Build the index from already-harvested catalogs.
    ///
    /// Features of `excluded_lang` are skipped (the platform variant this
    /// index does not cover). Tagged features contribute one entry per
    /// tag; tagless ones land in the [`UNTAGGED_BUCKET`].
    pub fn build<'a>(
        catalogs: impl IntoIterator<Item = &'a FeatureCatalog>,
        excluded_lang: &Language,
        product: &str,
    ) -> Self {
        let mut index = Self::default();
        for catalog in catalogs {
            for feature in catalog.features() {
                if &feature.lang == excluded_lang {
                    continue;
                }
                let entry = TagEntry {
                    lang: feature.lang.clone(),
                    product: product.to_string(),
                    id: feature.id.clone(),
                    text: feature.text.clone(),
                };
                if feature.tags.is_empty() {
                    index.push(UNTAGGED_BUCKET, feature.kind, entry);
                } else {
                    for tag in &feature.tags {
                        index.push(tag, feature.kind, entry.clone());
                    }
                }
            }
        }
        index
    }

    fn push(&mut self, tag: &str, kind: FeatureKind, entry: TagEntry) {
        self.tags
            .entry(tag.to_string())
            .or_default()
            .entry(kind)
            .or_default()
            .push(entry);
    }

    /// Number of entries across all tags and kinds.
    pub fn len(&self) -> usize {
        self.tags
            .values()
            .flat_map(|kinds| kinds.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Feature;

    fn catalog_with(features: Vec<Feature>) -> FeatureCatalog {
        let mut catalog = FeatureCatalog::new(features[0].kind);
        for feature in features {
            catalog.insert(feature);
        }
        catalog
    }

    #[test]
    fn tagged_feature_appears_under_each_tag() {
        let catalog = catalog_with(vec![Feature::new(
            FeatureKind::QuickFix,
            "RemoveBracesFix",
            Language::csharp(),
        )
        .unwrap()
        .with_tags(vec!["braces".to_string(), "style".to_string()])]);

        let index = TagIndex::build([&catalog], &Language::cpp(), "Platform");
        assert_eq!(index.len(), 2);
        assert!(index.tags.contains_key("braces"));
        assert!(index.tags.contains_key("style"));
    }

    #[test]
    fn tagless_feature_lands_in_other() {
        let catalog = catalog_with(vec![Feature::new(
            FeatureKind::QuickFix,
            "PlainFix",
            Language::csharp(),
        )
        .unwrap()]);

        let index = TagIndex::build([&catalog], &Language::cpp(), "Platform");
        let other = &index.tags[UNTAGGED_BUCKET][&FeatureKind::QuickFix];
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].id, "PlainFix");
        assert_eq!(other[0].product, "Platform");
    }

    #[test]
    fn excluded_language_is_skipped() {
        let catalog = catalog_with(vec![
            Feature::new(FeatureKind::QuickFix, "KeptFix", Language::csharp()).unwrap(),
            Feature::new(FeatureKind::QuickFix, "DroppedFix", Language::cpp()).unwrap(),
        ]);

        let index = TagIndex::build([&catalog], &Language::cpp(), "Platform");
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.tags[UNTAGGED_BUCKET][&FeatureKind::QuickFix][0].id,
            "KeptFix"
        );
    }

    #[test]
    fn entries_group_by_tag_then_kind() {
        let fixes = catalog_with(vec![Feature::new(
            FeatureKind::QuickFix,
            "Fix",
            Language::csharp(),
        )
        .unwrap()
        .with_tags(vec!["style".to_string()])]);
        let inspections = catalog_with(vec![Feature::new(
            FeatureKind::StaticInspection,
            "Inspection",
            Language::csharp(),
        )
        .unwrap()
        .with_tags(vec!["style".to_string()])]);

        let index = TagIndex::build([&fixes, &inspections], &Language::cpp(), "Platform");
        let style = &index.tags["style"];
        assert_eq!(style.len(), 2);
        assert!(style.contains_key(&FeatureKind::QuickFix));
        assert!(style.contains_key(&FeatureKind::StaticInspection));
    }

    #[test]
    fn repeated_build_calls_do_not_deduplicate() {
        let catalog = catalog_with(vec![Feature::new(
            FeatureKind::QuickFix,
            "Fix",
            Language::csharp(),
        )
        .unwrap()]);

        let index = TagIndex::build([&catalog, &catalog], &Language::cpp(), "Platform");
        assert_eq!(index.len(), 2);
    }
}
