//! Static-inspection harvesting pass.

use crate::model::{Feature, FeatureCatalog, FeatureKind, Language};
use crate::registry::{CategoryLanguages, QuickFixIndex};
use crate::universe::TypeMetadata;

use super::text::{is_placeholder_tooltip, title_from_type_name, LanguageMarkers};
use super::{type_languages, HarvestContext, UncountedFeature};

/// Group reserved for structural-search patterns; never cataloged.
const STRUCTURAL_SEARCH_GROUP: &str = "StructuralSearch";

/// Marker for inspections of the embedded regular-expression format.
const REGEXP_MARKER: &str = "RegExp";

/// Marker for unresolved-path errors, which apply platform-wide.
const UNRESOLVED_PATH_MARKER: &str = "UnresolvedPath";

/// Harvest every classified static-inspection type.
///
/// Types at the lowest informational severity, members of the
/// structural-search group, and generated language-prefixed `...Error`
/// names without a quick fix are skipped. Types whose language no rule
/// resolves land in the uncounted diagnostics list.
pub(super) fn harvest_static_inspections(
    inspections: &[&TypeMetadata],
    index: &QuickFixIndex,
    categories: &CategoryLanguages,
    markers: &LanguageMarkers,
    catalog: &mut FeatureCatalog,
    context: &mut HarvestContext,
) {
    for ty in inspections {
        if !ty.default_severity.is_some_and(|s| s.is_catalogable()) {
            continue;
        }
        if is_generated_error_name(&ty.short_name, markers) && !index.has_fix(&ty.full_name) {
            tracing::debug!(inspection = %ty.full_name, "skipping generated error name");
            continue;
        }
        if ty.group_id.as_deref() == Some(STRUCTURAL_SEARCH_GROUP) {
            continue;
        }

        let languages = resolve_languages(ty, categories);
        if languages.is_empty() {
            context.uncounted.push(UncountedFeature {
                id: ty.short_name.clone(),
                compound_name: Some(ty.full_name.clone()),
            });
            tracing::warn!(inspection = %ty.full_name, "no rule resolved a language");
            continue;
        }

        let text = match ty.tooltip.as_deref() {
            Some(tooltip) if !is_placeholder_tooltip(tooltip) => tooltip.to_string(),
            _ => title_from_type_name(&ty.short_name),
        };

        for lang in &languages {
            let feature =
                match Feature::new(FeatureKind::StaticInspection, &ty.short_name, lang.clone()) {
                    Ok(f) => f,
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping inspection with invalid id");
                        continue;
                    }
                };
            let mut feature = feature
                .with_text(&text)
                .with_multilang(languages.clone())
                .with_compound_name(&ty.full_name)
                .with_tags(ty.tags.clone());
            if let Some(severity) = ty.default_severity {
                feature = feature.with_severity(severity);
            }
            if let Some(group) = &ty.group_id {
                feature = feature.with_group(group);
            }
            catalog.insert(feature);
        }
    }
}

/// Deprecated/auto-generated naming pattern: a known language marker prefix
/// with an `Error` suffix, e.g. `CSharpUnresolvedError`.
fn is_generated_error_name(short_name: &str, markers: &LanguageMarkers) -> bool {
    short_name.ends_with("Error") && markers.has_language_prefix(short_name)
}

fn resolve_languages(ty: &TypeMetadata, categories: &CategoryLanguages) -> Vec<Language> {
    if !ty.languages.is_empty() {
        return ty.languages.clone();
    }
    // Two hand-coded exceptions predate the category table and still beat it.
    if ty.full_name.contains(REGEXP_MARKER) {
        return vec![Language::regexp()];
    }
    if ty.full_name.contains(UNRESOLVED_PATH_MARKER) {
        return vec![Language::common()];
    }
    type_languages(ty, categories)
}
