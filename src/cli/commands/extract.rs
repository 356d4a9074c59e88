use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use super::{CommandResult, CommandSummary, ExtractSummary, context::ProjectContext};
use crate::catalog::{Catalog, ReconcileOptions, read_catalog, reconcile_with_stats, write_catalog};
use crate::cli::args::ExtractCommand;
use crate::core::{PluginRegistry, Progress, extract::ExtractOptions, extract_from_directory, merge_results};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common)?;
    let options = ExtractOptions::from_config(&ctx.config);
    let registry = PluginRegistry::with_builtins();

    let on_progress: &(dyn Fn(&Progress<'_>) + Sync) = &|progress| {
        debug!(file = progress.file, "[{}/{}] extracted", progress.current, progress.total);
    };
    let extraction = extract_from_directory(&ctx.source_root, &registry, &options, Some(on_progress))?;
    let merged = merge_results(&extraction.items);

    // New keys start out with the key as their own value
    let extracted: Catalog = merged.iter().map(|item| (item.key.clone(), item.key.clone())).collect();
    let catalog_path = ctx.source_catalog_path();
    let existing = read_catalog(&catalog_path)?;
    let reconciled = reconcile_with_stats(
        &extracted,
        &existing,
        &ReconcileOptions {
            flush: cmd.flush,
            ..Default::default()
        },
    );
    write_catalog(&catalog_path, &reconciled.result, ctx.write_options())?;

    if let Some(report_path) = &cmd.report {
        let json = serde_json::to_string_pretty(&merged).context("Failed to serialize extraction report")?;
        fs::write(report_path, format!("{}\n", json))
            .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
    }

    let summary = ExtractSummary {
        catalog_path,
        files_scanned: extraction.files_scanned,
        key_count: merged.len(),
        stats: reconciled.stats,
        report_path: cmd.report,
    };
    Ok(CommandResult {
        failures: extraction.failures,
        ..CommandResult::new(CommandSummary::Extract(summary))
    })
}
