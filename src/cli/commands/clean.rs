use anyhow::Result;

use super::{CleanSummary, CommandResult, CommandSummary, LocaleClean, context::ProjectContext};
use crate::catalog::{clean_unused, read_catalog, write_catalog};
use crate::cli::args::CleanCommand;

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;

    let mut locales = Vec::new();
    for (locale, path) in ctx.target_locales()? {
        let catalog = read_catalog(&path)?;
        let cleaned = clean_unused(&catalog, cmd.remove_untranslated);
        let removed: Vec<String> = catalog.keys().filter(|key| !cleaned.contains_key(*key)).cloned().collect();
        if removed.is_empty() {
            continue;
        }
        if cmd.apply {
            write_catalog(&path, &cleaned, ctx.write_options())?;
        }
        locales.push(LocaleClean { locale, removed });
    }

    Ok(CommandResult::new(CommandSummary::Clean(CleanSummary {
        is_apply: cmd.apply,
        locales,
    })))
}
