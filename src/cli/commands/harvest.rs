//! The `harvest` command: snapshot in, catalog store out.

use std::fs;
use std::path::Path;

use crate::cli::args::HarvestArgs;
use crate::config::HarvestConfig;
use crate::error::Result;
use crate::harvest::{Harvester, LanguageMarkers};
use crate::store::CatalogStore;
use crate::tags::TagIndex;
use crate::ui::Output;
use crate::universe::SnapshotUniverse;

use super::dispatcher::{Command, CommandResult};

/// Runs one full harvesting session.
pub struct HarvestCommand {
    args: HarvestArgs,
}

impl HarvestCommand {
    pub fn new(args: HarvestArgs) -> Self {
        Self { args }
    }

    fn load_config(&self) -> Result<HarvestConfig> {
        match &self.args.config {
            Some(path) => HarvestConfig::load(path),
            None => {
                let dir = self.args.universe.parent().unwrap_or(Path::new("."));
                HarvestConfig::discover(dir)
            }
        }
    }
}

impl Command for HarvestCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let config = self.load_config()?;
        let universe = SnapshotUniverse::load(&self.args.universe)?;
        let index = universe.quick_fix_index();
        let categories = config.category_table();

        let mut harvest = Harvester::new(&universe, &universe, &index, &categories)
            .with_markers(LanguageMarkers::with_extras(&config.name_markers))
            .with_context_actions(universe.context_action_catalog())
            .with_include_internal(self.args.include_internal || config.include_internal)
            .run();
        harvest.sort_for_merge();

        for skip in &harvest.context.skipped_units {
            out.warning(&format!("skipped unit {}: {}", skip.unit, skip.reason));
        }
        if !harvest.context.uncounted.is_empty() {
            out.warning(&format!(
                "{} feature(s) had no resolvable language",
                harvest.context.uncounted.len()
            ));
            for uncounted in &harvest.context.uncounted {
                out.detail(&format!(
                    "uncounted: {} ({})",
                    uncounted.id,
                    uncounted.compound_name.as_deref().unwrap_or("?")
                ));
            }
        }

        // Only a corrupt store aborts; everything above is diagnostics.
        let mut store = CatalogStore::open(&self.args.store, &self.args.release)?;
        out.println(&format!(
            "Merging into {} under version {}",
            self.args.store.display(),
            self.args.release
        ));

        let mut grand_new = 0usize;
        for catalog in harvest.catalogs() {
            let outcome = store.merge(catalog);
            grand_new += outcome.new;
            out.println(&format!(
                "  {:<30} discovered {:>4}, new {:>4}",
                outcome.kind.title(),
                outcome.total,
                outcome.new
            ));
        }

        if let Some(tags_out) = &self.args.tags_out {
            let product = universe
                .product()
                .map(str::to_string)
                .unwrap_or_else(|| config.product.clone());
            let tag_index = TagIndex::build(
                harvest.catalogs(),
                &config.excluded_tag_language,
                &product,
            );
            let json = serde_json::to_string_pretty(&tag_index).map_err(anyhow::Error::from)?;
            fs::write(tags_out, json)?;
            out.println(&format!(
                "Wrote tag index ({} entries) to {}",
                tag_index.len(),
                tags_out.display()
            ));
        }

        store.close()?;
        out.success(&format!(
            "Harvest complete: {} new feature(s) recorded under {}",
            grand_new, self.args.release
        ));
        Ok(CommandResult::success())
    }
}
