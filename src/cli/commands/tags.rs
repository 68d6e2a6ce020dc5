//! The `tags` command: build the tag-indexed feature view.

use std::fs;
use std::path::Path;

use crate::cli::args::TagsArgs;
use crate::config::HarvestConfig;
use crate::error::Result;
use crate::harvest::{Harvester, LanguageMarkers};
use crate::model::Language;
use crate::tags::TagIndex;
use crate::ui::Output;
use crate::universe::SnapshotUniverse;

use super::dispatcher::{Command, CommandResult};

/// Harvests the snapshot and writes its tag index, bypassing the store.
pub struct TagsCommand {
    args: TagsArgs,
}

impl TagsCommand {
    pub fn new(args: TagsArgs) -> Self {
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

impl Command for TagsCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let config = self.load_config()?;
        let universe = SnapshotUniverse::load(&self.args.universe)?;
        let index = universe.quick_fix_index();
        let categories = config.category_table();

        let harvest = Harvester::new(&universe, &universe, &index, &categories)
            .with_markers(LanguageMarkers::with_extras(&config.name_markers))
            .with_context_actions(universe.context_action_catalog())
            .run();

        let excluded = self
            .args
            .exclude_lang
            .as_deref()
            .map(Language::new)
            .unwrap_or_else(|| config.excluded_tag_language.clone());
        let product = self
            .args
            .product
            .clone()
            .or_else(|| universe.product().map(str::to_string))
            .unwrap_or_else(|| config.product.clone());

        let tag_index = TagIndex::build(harvest.catalogs(), &excluded, &product);
        let json = serde_json::to_string_pretty(&tag_index).map_err(anyhow::Error::from)?;
        fs::write(&self.args.out, json)?;

        out.success(&format!(
            "Wrote {} tag(s), {} entr(ies) to {}",
            tag_index.tags.len(),
            tag_index.len(),
            self.args.out.display()
        ));
        Ok(CommandResult::success())
    }
}
