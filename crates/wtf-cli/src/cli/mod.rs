//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// `--version` is declared by hand so that it prints the bare version string
/// and nothing else.
#[derive(Debug, Parser)]
#[command(
    name     = "wtf-init",
    bin_name = "wtf-init",
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Initialize a WTF (Wiredrive Test Framework) project",
    long_about = "wtf-init creates the directory layout, runner script, default \
                  config and requirements file of a WTF web test project. \
                  Re-running it is safe: existing files are left alone.",
    after_help = "EXAMPLES:\n\
        \x20 wtf-init myproject\n\
        \x20 wtf-init myproject --withexamples\n\
        \x20 wtf-init --yes               # initialize the current directory\n\
        \x20 wtf-init myproject --dry-run --output-format json\n\
        \x20 wtf-init --completions bash > ~/.local/share/bash-completion/completions/wtf-init",
    disable_version_flag = true,
)]
pub struct Cli {
    /// Flags shared with every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project directory to create. Omit it to initialize the current
    /// directory after confirmation.
    #[arg(value_name = "PROJECT_NAME", help = "Name of the project directory")]
    pub project_name: Option<String>,

    /// Also generate the example page object, flow, data and test.
    #[arg(
        long = "withexamples",
        help = "Generate example files (always overwrites them)"
    )]
    pub with_examples: bool,

    /// Print the version and exit.
    #[arg(long = "version", help = "Print the version and exit")]
    pub version: bool,

    /// Overwrite template files that already exist.
    #[arg(long = "force", help = "Overwrite existing template files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation asked when no project name is given.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Initialize the current directory without asking"
    )]
    pub yes: bool,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
