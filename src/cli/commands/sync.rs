use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, LocaleSync, SyncSummary, context::ProjectContext};
use crate::catalog::{ReconcileOptions, read_catalog, reconcile_with_stats, write_catalog};
use crate::cli::args::SyncCommand;

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    let source_path = ctx.source_catalog_path();
    if !source_path.exists() {
        bail!(
            "Source catalog '{}' does not exist.\nHint: Run `lingo extract` first.",
            source_path.display()
        );
    }
    let source = read_catalog(&source_path)?;

    let options = ReconcileOptions {
        flush: cmd.flush,
        remove_untranslated: cmd.remove_untranslated,
        validate_params: cmd.validate_params,
    };

    let mut locales = Vec::new();
    for (locale, path) in ctx.target_locales()? {
        let target = read_catalog(&path)?;
        let reconciled = reconcile_with_stats(&source, &target, &options);
        write_catalog(&path, &reconciled.result, ctx.write_options())?;
        locales.push(LocaleSync {
            locale,
            stats: reconciled.stats,
        });
    }

    Ok(CommandResult::new(CommandSummary::Sync(SyncSummary {
        source_locale: ctx.source_locale().to_string(),
        locales,
    })))
}
