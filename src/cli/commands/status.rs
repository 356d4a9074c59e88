use anyhow::Result;

use super::{CommandResult, CommandSummary, LocaleStatus, StatusSummary, context::ProjectContext};
use crate::catalog::{coverage, find_missing, read_catalog};
use crate::cli::args::StatusCommand;

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    let source = read_catalog(&ctx.source_catalog_path())?;

    // An explicitly requested locale is reported even if its catalog is missing
    let targets = match &cmd.locale {
        Some(locale) => vec![(locale.clone(), ctx.catalog_path(locale))],
        None => ctx.target_locales()?,
    };

    let mut locales = Vec::with_capacity(targets.len());
    for (locale, path) in targets {
        let target = read_catalog(&path)?;
        locales.push(LocaleStatus {
            locale,
            coverage: coverage(&source, &target),
            missing: find_missing(&source, &target),
        });
    }

    let missing_total: usize = locales.iter().map(|l| l.coverage.missing).sum();
    Ok(CommandResult::new(CommandSummary::Status(StatusSummary {
        source_locale: ctx.source_locale().to_string(),
        locales,
    }))
    .with_issues(missing_total))
}
