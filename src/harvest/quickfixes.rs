//! Quick-fix harvesting pass.

use std::collections::HashMap;

use crate::model::{Feature, FeatureCatalog, FeatureKind, Language};
use crate::registry::{CategoryLanguages, QuickFixIndex};
use crate::universe::TypeMetadata;

use super::text::{title_from_type_name, LanguageMarkers};
use super::type_languages;

/// Harvest every classified quick-fix type into the quick-fix catalog,
/// with a parallel fix-in-scope feature for scope-aware fixes.
///
/// A fix registered against no inspection is unused and discarded. The
/// fix's languages are the union over the inspections it fixes; when that
/// union is empty the fix's own name is the last resort.
pub(super) fn harvest_quick_fixes(
    fixes: &[&TypeMetadata],
    types_by_name: &HashMap<&str, &TypeMetadata>,
    index: &QuickFixIndex,
    categories: &CategoryLanguages,
    markers: &LanguageMarkers,
    quick_fixes: &mut FeatureCatalog,
    fixes_in_scope: &mut FeatureCatalog,
) {
    for fix in fixes {
        let fixed = index.inspections_fixed_by(&fix.full_name);
        if fixed.is_empty() {
            tracing::debug!(fix = %fix.full_name, "discarding unused quick fix");
            continue;
        }

        let text = fix
            .probe_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| title_from_type_name(&fix.short_name));

        let mut languages: Vec<Language> = Vec::new();
        for inspection_name in fixed {
            let Some(inspection) = types_by_name.get(inspection_name.as_str()) else {
                continue;
            };
            for lang in type_languages(inspection, categories) {
                if !languages.contains(&lang) {
                    languages.push(lang);
                }
            }
        }
        if languages.is_empty() {
            languages.push(markers.language_from_name(&fix.full_name));
        }

        for lang in &languages {
            let feature = match Feature::new(FeatureKind::QuickFix, &fix.short_name, lang.clone())
            {
                Ok(f) => f
                    .with_text(&text)
                    .with_multilang(languages.clone())
                    .with_compound_name(&fix.full_name)
                    .with_tags(fix.tags.clone()),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping quick fix with invalid id");
                    continue;
                }
            };
            quick_fixes.insert(feature);

            if fix.scope_aware {
                if let Ok(f) =
                    Feature::new(FeatureKind::FixInScope, &fix.short_name, lang.clone())
                {
                    fixes_in_scope.insert(
                        f.with_text(&text)
                            .with_multilang(languages.clone())
                            .with_compound_name(&fix.full_name)
                            .with_tags(fix.tags.clone()),
                    );
                }
            }
        }
    }
}
