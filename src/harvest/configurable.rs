//! Configurable-inspection harvesting pass.
//!
//! Unlike the other passes this one iterates the severity registry directly
//! rather than the type universe: every registered severity configuration
//! is a configurable inspection, whether or not its backing type was seen.

use crate::model::{Feature, FeatureCatalog, FeatureKind, Language};
use crate::registry::SeverityRegistry;

use super::text::extract_link;
use super::{HarvestContext, UncountedFeature};

/// Harvest every registered severity configuration.
///
/// Internal-only entries are skipped unless internal mode is on. An
/// explicit language override replaces the implemented-language list with
/// that single entry. Re-inserting a `(kind, id, language)` combination the
/// catalog already holds is a no-op.
pub(super) fn harvest_configurable_inspections(
    registry: &dyn SeverityRegistry,
    include_internal: bool,
    catalog: &mut FeatureCatalog,
    context: &mut HarvestContext,
) {
    for config in registry.configurations() {
        if config.internal && !include_internal {
            continue;
        }

        let languages: Vec<Language> = match &config.override_language {
            Some(lang) => vec![lang.clone()],
            None => registry.implementations_for(&config.id),
        };
        if languages.is_empty() {
            context.uncounted.push(UncountedFeature {
                id: config.id.clone(),
                compound_name: config.compound_name.clone(),
            });
            tracing::warn!(inspection = %config.id, "configuration has no implementations");
            continue;
        }

        if let Some(link) = extract_link(&config.description) {
            context
                .link_table
                .entry(config.id.clone())
                .or_insert(link);
        }

        for lang in &languages {
            let feature =
                match Feature::new(FeatureKind::ConfigInspection, &config.id, lang.clone()) {
                    Ok(f) => f,
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping configuration with invalid id");
                        continue;
                    }
                };
            let mut feature = feature
                .with_text(&config.title)
                .with_multilang(languages.clone())
                .with_severity(config.default_severity)
                .with_related_ids(config.related_ids.clone());
            if let Some(group) = &config.group_id {
                feature = feature.with_group(group);
            }
            if let Some(name) = &config.compound_name {
                feature = feature.with_compound_name(name);
            }
            if let Some(ec) = &config.editorconfig_id {
                feature = feature.with_editorconfig_id(ec);
            }
            catalog.insert(feature);
        }
    }
}
