//! Feature harvesting: one pass over the type universe plus the severity
//! registry, producing deduplicated per-kind catalogs.
//!
//! The pass is order-independent across types but deterministic per type:
//! every type is classified exactly once (see [`classify`]), each
//! classification feeds its own sub-pass, and the cross-index pass runs
//! last because it re-files features the earlier passes produced.
//!
//! All cross-cutting mutable state lives in [`HarvestContext`], threaded
//! through the pass. There is no global state.

pub mod classify;
mod configurable;
mod inspections;
mod quickfixes;
pub mod text;

use std::collections::{BTreeMap, HashMap};

use crate::model::{FeatureCatalog, FeatureKind, Language};
use crate::registry::{CategoryLanguages, QuickFixIndex, SeverityRegistry};
use crate::universe::{TypeMetadata, TypeUniverse, UnitSkip};

pub use classify::{classify, Classification};
pub use text::LanguageMarkers;

use configurable::harvest_configurable_inspections;
use inspections::harvest_static_inspections;
use quickfixes::harvest_quick_fixes;

/// A harvested entity whose language no rule could resolve.
///
/// Tracked for operator review; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncountedFeature {
    pub id: String,
    pub compound_name: Option<String>,
}

/// Mutable cross-cutting state owned by one harvesting pass.
#[derive(Debug, Default)]
pub struct HarvestContext {
    /// Inspection id -> documentation hyperlink extracted from its
    /// description. First writer wins.
    pub link_table: BTreeMap<String, String>,

    /// Entities whose language could not be resolved by any rule.
    pub uncounted: Vec<UncountedFeature>,

    /// Loading units whose types could not be enumerated.
    pub skipped_units: Vec<UnitSkip>,
}

/// Result of one harvesting pass: one catalog per kind, plus diagnostics.
#[derive(Debug)]
pub struct Harvest {
    catalogs: BTreeMap<FeatureKind, FeatureCatalog>,
    pub context: HarvestContext,
}

impl Harvest {
    /// The catalog for one kind. Every kind has a catalog, possibly empty.
    pub fn catalog(&self, kind: FeatureKind) -> &FeatureCatalog {
        &self.catalogs[&kind]
    }

    /// All catalogs in the fixed merge order.
    pub fn catalogs(&self) -> impl Iterator<Item = &FeatureCatalog> {
        FeatureKind::ALL.iter().map(|kind| &self.catalogs[kind])
    }

    /// Sort every catalog by display text, establishing the order features
    /// are recorded in by the versioned store.
    pub fn sort_for_merge(&mut self) {
        for catalog in self.catalogs.values_mut() {
            catalog.sort_by_text();
        }
    }

    /// Per-kind discovered counts, in merge order.
    pub fn discovered(&self) -> Vec<(FeatureKind, usize)> {
        FeatureKind::ALL
            .iter()
            .map(|kind| (*kind, self.catalogs[kind].len()))
            .collect()
    }
}

/// Walks the type universe and the severity registry, producing a
/// [`Harvest`].
pub struct Harvester<'a> {
    universe: &'a dyn TypeUniverse,
    registry: &'a dyn SeverityRegistry,
    quick_fix_index: &'a QuickFixIndex,
    categories: &'a CategoryLanguages,
    markers: LanguageMarkers,
    context_actions: FeatureCatalog,
    include_internal: bool,
}

impl<'a> Harvester<'a> {
    /// Create a harvester over the given universe and lookups.
    pub fn new(
        universe: &'a dyn TypeUniverse,
        registry: &'a dyn SeverityRegistry,
        quick_fix_index: &'a QuickFixIndex,
        categories: &'a CategoryLanguages,
    ) -> Self {
        Self {
            universe,
            registry,
            quick_fix_index,
            categories,
            markers: LanguageMarkers::builtin(),
            context_actions: FeatureCatalog::new(FeatureKind::ContextAction),
            include_internal: false,
        }
    }

    /// Replace the name-marker table (config extras).
    pub fn with_markers(mut self, markers: LanguageMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Supply the separately-harvested flat context-action catalog.
    pub fn with_context_actions(mut self, catalog: FeatureCatalog) -> Self {
        self.context_actions = catalog;
        self
    }

    /// Harvest internal-only severity configurations too.
    pub fn with_include_internal(mut self, include_internal: bool) -> Self {
        self.include_internal = include_internal;
        self
    }

    /// Run the full pass.
    pub fn run(self) -> Harvest {
        let mut context = HarvestContext::default();

        // Unit enumeration is total-failure-tolerant: a unit whose types
        // cannot be loaded is recorded and the pass moves on.
        let units = self.universe.units();
        let mut all_types: Vec<&TypeMetadata> = Vec::new();
        for unit in &units {
            match unit {
                Ok((name, types)) => {
                    tracing::debug!(unit = %name, types = types.len(), "enumerated unit");
                    all_types.extend(types.iter());
                }
                Err(skip) => {
                    tracing::warn!(unit = %skip.unit, reason = %skip.reason, "skipping unit");
                    context.skipped_units.push(skip.clone());
                }
            }
        }

        let mut types_by_name: HashMap<&str, &TypeMetadata> = HashMap::new();
        let mut fixes: Vec<&TypeMetadata> = Vec::new();
        let mut scoped: Vec<&TypeMetadata> = Vec::new();
        let mut statics: Vec<&TypeMetadata> = Vec::new();
        for &ty in &all_types {
            types_by_name.insert(ty.full_name.as_str(), ty);
            match classify(ty) {
                Some(Classification::QuickFix) => fixes.push(ty),
                Some(Classification::ScopedAction) => scoped.push(ty),
                Some(Classification::StaticInspection) => statics.push(ty),
                None => {}
            }
        }

        let mut quick_fixes = FeatureCatalog::new(FeatureKind::QuickFix);
        let mut fixes_in_scope = FeatureCatalog::new(FeatureKind::FixInScope);
        harvest_quick_fixes(
            &fixes,
            &types_by_name,
            self.quick_fix_index,
            self.categories,
            &self.markers,
            &mut quick_fixes,
            &mut fixes_in_scope,
        );

        let actions_in_scope = self.harvest_scoped_actions(&scoped);

        let mut static_inspections = FeatureCatalog::new(FeatureKind::StaticInspection);
        harvest_static_inspections(
            &statics,
            self.quick_fix_index,
            self.categories,
            &self.markers,
            &mut static_inspections,
            &mut context,
        );

        let mut config_inspections = FeatureCatalog::new(FeatureKind::ConfigInspection);
        harvest_configurable_inspections(
            self.registry,
            self.include_internal,
            &mut config_inspections,
            &mut context,
        );

        let cross_index =
            self.build_cross_index(&types_by_name, &static_inspections, &config_inspections);

        let mut catalogs = BTreeMap::new();
        catalogs.insert(FeatureKind::ConfigInspection, config_inspections);
        catalogs.insert(FeatureKind::StaticInspection, static_inspections);
        catalogs.insert(FeatureKind::ContextAction, self.context_actions);
        catalogs.insert(FeatureKind::QuickFix, quick_fixes);
        catalogs.insert(FeatureKind::FixInScope, fixes_in_scope);
        catalogs.insert(FeatureKind::ContextActionInScope, actions_in_scope);
        catalogs.insert(FeatureKind::InspectionWithQuickFix, cross_index);

        Harvest { catalogs, context }
    }

    /// Scoped context actions inherit text and language from the flat
    /// context-action catalog; a type with no match contributes nothing.
    fn harvest_scoped_actions(&self, scoped: &[&TypeMetadata]) -> FeatureCatalog {
        let mut catalog = FeatureCatalog::new(FeatureKind::ContextActionInScope);
        for ty in scoped {
            for action in self.context_actions.by_compound_name(&ty.full_name) {
                catalog.insert(action.as_kind(FeatureKind::ContextActionInScope));
            }
        }
        catalog
    }

    /// For every inspection type known to have a quick fix, re-file its
    /// features under the inspection-with-quick-fix kind: from the static
    /// catalog when present, otherwise (for configurable-severity types)
    /// from the configurable catalog via the type's severity id.
    fn build_cross_index(
        &self,
        types_by_name: &HashMap<&str, &TypeMetadata>,
        statics: &FeatureCatalog,
        configs: &FeatureCatalog,
    ) -> FeatureCatalog {
        let mut catalog = FeatureCatalog::new(FeatureKind::InspectionWithQuickFix);
        for inspection_name in self.quick_fix_index.fixed_inspections() {
            let from_static = statics.by_compound_name(inspection_name);
            if !from_static.is_empty() {
                for feature in from_static {
                    catalog.insert(feature.as_kind(FeatureKind::InspectionWithQuickFix));
                }
                continue;
            }
            let Some(ty) = types_by_name.get(inspection_name) else {
                continue;
            };
            if !ty.configurable_severity {
                continue;
            }
            let Some(severity_id) = &ty.severity_id else {
                continue;
            };
            for feature in configs.by_id(severity_id) {
                catalog.insert(feature.as_kind(FeatureKind::InspectionWithQuickFix));
            }
        }
        catalog
    }
}

/// Languages a type is implemented for: explicit declarations first, then
/// the category fallback table.
pub(crate) fn type_languages(
    ty: &TypeMetadata,
    categories: &CategoryLanguages,
) -> Vec<Language> {
    if !ty.languages.is_empty() {
        return ty.languages.clone();
    }
    ty.group_id
        .as_deref()
        .and_then(|group| categories.languages_for(group))
        .map(<[Language]>::to_vec)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SeverityConfiguration;
    use crate::universe::SnapshotUniverse;

    struct EmptyRegistry;

    impl SeverityRegistry for EmptyRegistry {
        fn configurations(&self) -> Vec<&SeverityConfiguration> {
            Vec::new()
        }

        fn implementations_for(&self, _id: &str) -> Vec<Language> {
            Vec::new()
        }
    }

    const SNAPSHOT: &str = r#"{
        "units": [
            {
                "name": "Platform.CSharp",
                "types": [
                    {
                        "full_name": "Platform.CSharp.RemoveBracesFix",
                        "short_name": "RemoveBracesFix",
                        "quick_fix": true,
                        "scope_aware": true,
                        "probe_text": "Remove braces"
                    },
                    {
                        "full_name": "Platform.CSharp.RedundantBraces",
                        "short_name": "RedundantBraces",
                        "static_severity": true,
                        "default_severity": "Warning",
                        "languages": ["C#", "VB.NET"],
                        "tooltip": "Redundant braces"
                    },
                    {
                        "full_name": "Platform.CSharp.InvertIfAction",
                        "short_name": "InvertIfAction",
                        "scope_aware": true
                    }
                ]
            },
            { "name": "Platform.Broken", "error": "bad image format" }
        ],
        "context_actions": [
            { "type_name": "Platform.CSharp.InvertIfAction", "text": "Invert 'if'", "lang": "C#" },
            { "type_name": "Platform.CSharp.UnmatchedAction", "text": "Unmatched", "lang": "C#" }
        ],
        "quick_fix_associations": {
            "Platform.CSharp.RemoveBracesFix": ["Platform.CSharp.RedundantBraces"]
        }
    }"#;

    fn harvest(universe: &SnapshotUniverse) -> Harvest {
        let index = universe.quick_fix_index();
        let categories = CategoryLanguages::defaults();
        let registry = EmptyRegistry;
        Harvester::new(universe, &registry, &index, &categories)
            .with_context_actions(universe.context_action_catalog())
            .run()
    }

    #[test]
    fn full_pass_classifies_every_kind() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let harvest = harvest(&universe);

        // Quick fix over a two-language inspection lands in both languages.
        let quick_fixes = harvest.catalog(FeatureKind::QuickFix);
        assert_eq!(quick_fixes.len(), 2);
        assert!(quick_fixes.contains("RemoveBracesFix", &Language::csharp()));
        assert!(quick_fixes.contains("RemoveBracesFix", &Language::vbnet()));

        // Scope-aware fix produced the parallel kind.
        assert_eq!(harvest.catalog(FeatureKind::FixInScope).len(), 2);

        // Static inspection present per language.
        assert_eq!(harvest.catalog(FeatureKind::StaticInspection).len(), 2);

        // Scoped action matched the flat catalog by full name; the
        // unmatched entry contributed nothing.
        let in_scope = harvest.catalog(FeatureKind::ContextActionInScope);
        assert_eq!(in_scope.len(), 1);
        assert_eq!(in_scope.features()[0].text, "Invert 'if'");
    }

    #[test]
    fn broken_unit_is_recorded_and_tolerated() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let harvest = harvest(&universe);
        assert_eq!(harvest.context.skipped_units.len(), 1);
        assert_eq!(harvest.context.skipped_units[0].unit, "Platform.Broken");
        // Harvesting still produced results.
        assert!(!harvest.catalog(FeatureKind::QuickFix).is_empty());
    }

    #[test]
    fn cross_index_covers_every_language_of_fixed_inspection() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let harvest = harvest(&universe);
        let cross = harvest.catalog(FeatureKind::InspectionWithQuickFix);
        assert_eq!(cross.len(), 2);
        assert!(cross.contains("RedundantBraces", &Language::csharp()));
        assert!(cross.contains("RedundantBraces", &Language::vbnet()));
    }

    #[test]
    fn cross_index_falls_back_to_configurable_catalog() {
        let snapshot = r#"{
            "units": [
                {
                    "name": "Platform.CSharp",
                    "types": [
                        {
                            "full_name": "Platform.CSharp.HideFix",
                            "short_name": "HideFix",
                            "quick_fix": true
                        },
                        {
                            "full_name": "Platform.CSharp.MemberHides",
                            "short_name": "MemberHides",
                            "configurable_severity": true,
                            "severity_id": "CS0108"
                        }
                    ]
                }
            ],
            "severity_configurations": [
                {
                    "id": "CS0108",
                    "title": "Member hides inherited member",
                    "default_severity": "Warning"
                }
            ],
            "severity_implementations": { "CS0108": ["C#", "VB.NET"] },
            "quick_fix_associations": {
                "Platform.CSharp.HideFix": ["Platform.CSharp.MemberHides"]
            }
        }"#;
        let universe = SnapshotUniverse::from_json(snapshot).unwrap();
        let index = universe.quick_fix_index();
        let categories = CategoryLanguages::defaults();
        let harvest = Harvester::new(&universe, &universe, &index, &categories).run();

        let cross = harvest.catalog(FeatureKind::InspectionWithQuickFix);
        assert_eq!(cross.len(), 2);
        assert!(cross.contains("CS0108", &Language::csharp()));
        assert!(cross.contains("CS0108", &Language::vbnet()));
    }

    #[test]
    fn discovered_counts_follow_merge_order() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let harvest = harvest(&universe);
        let discovered = harvest.discovered();
        assert_eq!(discovered.len(), FeatureKind::ALL.len());
        assert_eq!(discovered[0].0, FeatureKind::ConfigInspection);
        assert_eq!(discovered[3], (FeatureKind::QuickFix, 2));
    }

    #[test]
    fn sort_for_merge_orders_features_by_text() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let mut harvest = harvest(&universe);
        harvest.sort_for_merge();
        let statics = harvest.catalog(FeatureKind::StaticInspection);
        let texts: Vec<&str> = statics.features().iter().map(|f| f.text.as_str()).collect();
        let mut sorted = texts.clone();
        sorted.sort();
        assert_eq!(texts, sorted);
    }

    #[test]
    fn type_languages_prefers_explicit_declarations() {
        let mut ty = TypeMetadata::named("A.X");
        ty.languages = vec![Language::csharp()];
        ty.group_id = Some("VBNetErrors".to_string());
        let langs = type_languages(&ty, &CategoryLanguages::defaults());
        assert_eq!(langs, vec![Language::csharp()]);
    }

    #[test]
    fn context_action_catalog_passes_through_whole() {
        let universe = SnapshotUniverse::from_json(SNAPSHOT).unwrap();
        let harvest = harvest(&universe);
        // Both flat entries survive, matched or not.
        assert_eq!(harvest.catalog(FeatureKind::ContextAction).len(), 2);
    }
}
