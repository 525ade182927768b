//! `wtf-init [PROJECT_NAME]`: scaffold a WTF project.
//!
//! Responsibility: turn CLI flags and config into [`ScaffoldOptions`], pick
//! the adapters, call the core service and display the report. No business
//! logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use wtf_adapters::{BuiltinCatalog, DirectoryCatalog, DryRunFilesystem, LocalFilesystem};
use wtf_core::{
    VERSION,
    application::{
        ScaffoldOptions, ScaffoldService, resolve_project_dir,
        ports::{Answerer, Filesystem, TemplateCatalog},
    },
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt::TerminalAnswerer,
};

/// Execute a scaffold run.
///
/// Sequence:
/// 1. Resolve the project directory (asking unless a name or `--yes` is given)
/// 2. Merge flags with config defaults into [`ScaffoldOptions`]
/// 3. Build the filesystem (`--dry-run` wraps it) and template catalog
/// 4. Scaffold and print the report
#[instrument(skip_all, fields(project = cli.project_name.as_deref().unwrap_or(".")))]
pub fn execute(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    // 1. Project directory
    let cwd = std::env::current_dir().with_cli_context(|| "failed to read the current directory")?;
    let terminal = TerminalAnswerer;
    let assume_yes = |_: &str| true;
    let answerer: &dyn Answerer = if cli.yes { &assume_yes } else { &terminal };
    let project_dir = resolve_project_dir(cli.project_name.as_deref(), &cwd, answerer)?;

    // 2. Options
    let options = build_options(cli, config);
    debug!(?options, "Options resolved");

    // 3. Adapters
    let filesystem: Box<dyn Filesystem> = if cli.dry_run {
        Box::new(DryRunFilesystem::new(LocalFilesystem::new()))
    } else {
        Box::new(LocalFilesystem::new())
    };
    let catalog = build_catalog(config.templates.local_path.as_deref())?;
    let service = ScaffoldService::new(filesystem, catalog);

    // 4. Scaffold
    info!(path = %project_dir.display(), dry_run = cli.dry_run, "Scaffold started");
    let report = service.scaffold_project(&project_dir, &options)?;
    output.report(&report, cli.dry_run)?;

    if cli.dry_run {
        output.info("Dry run: nothing was written.")?;
    } else {
        if options.include_examples {
            output.info("Generated example files.")?;
        }
        output.success(&format!(
            "WTF project ready at {}",
            project_dir.display()
        ))?;
    }

    Ok(())
}

/// Flags win; config defaults can only switch features on.
fn build_options(cli: &Cli, config: &AppConfig) -> ScaffoldOptions {
    ScaffoldOptions::new(VERSION)
        .with_examples(cli.with_examples || config.defaults.with_examples)
        .overwrite_templates(cli.force || config.defaults.force)
}

fn build_catalog(local_path: Option<&Path>) -> CliResult<Box<dyn TemplateCatalog>> {
    match local_path {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template override directory");
            Ok(Box::new(DirectoryCatalog::new(dir)?))
        }
        None => Ok(Box::new(BuiltinCatalog::new())),
    }
}
