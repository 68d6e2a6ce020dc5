//! The `stats` command: print recorded per-version statistics.

use crate::cli::args::StatsArgs;
use crate::error::{QuarryError, Result};
use crate::store::{load_document, VersionNode};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// Prints the statistics blocks of one or all version nodes.
pub struct StatsCommand {
    args: StatsArgs,
}

impl StatsCommand {
    pub fn new(args: StatsArgs) -> Self {
        Self { args }
    }

    fn print_version(out: &Output, version: &VersionNode) {
        out.println(&format!(
            "Version {} (recorded {})",
            version.version,
            version.recorded_at.format("%Y-%m-%d")
        ));
        if version.statistics.is_empty() {
            out.println("  no statistics recorded");
            return;
        }
        for stats in &version.statistics {
            out.println(&format!(
                "  {:<30} total {:>4}, new {:>4}",
                stats.kind.title(),
                stats.total,
                stats.new
            ));
        }
        for language in &version.languages {
            out.detail(&format!(
                "{}: {} kind list(s)",
                language.lang,
                language.kinds.len()
            ));
        }
    }
}

impl Command for StatsCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let document = load_document(&self.args.store)?;

        match &self.args.release {
            Some(release) => {
                let version =
                    document
                        .version(release)
                        .ok_or_else(|| QuarryError::UnknownVersion {
                            version: release.clone(),
                        })?;
                Self::print_version(out, version);
            }
            None => {
                if document.versions.is_empty() {
                    out.println("Catalog store is empty");
                }
                for version in &document.versions {
                    Self::print_version(out, version);
                }
            }
        }
        Ok(CommandResult::success())
    }
}
