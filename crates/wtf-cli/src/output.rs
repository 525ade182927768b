//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use wtf_core::domain::{EntryKind, Outcome, ScaffoldEvent, ScaffoldReport};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match (args.output_format, config.output.format) {
            (OutputFormat::Auto, Some(configured)) => configured,
            (flag, _) => flag,
        };
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Render a scaffold report: one line per step, or the whole report as
    /// JSON. JSON is written even in quiet mode.
    pub fn report(&self, report: &ScaffoldReport, dry_run: bool) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::from)?;
            return self.term.write_line(&json);
        }
        if self.quiet {
            return Ok(());
        }

        for event in &report.events {
            let line = describe_event(event, dry_run);
            let line = if self.no_color {
                line
            } else {
                match event.outcome {
                    Outcome::Created => line.green().to_string(),
                    Outcome::Exists => line.dimmed().to_string(),
                    Outcome::Overwritten => line.yellow().to_string(),
                    Outcome::PermissionsSet => line,
                }
            };
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Human messages are dropped in quiet mode and when stdout carries JSON.
    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

/// One human-readable line for a scaffold step.
pub fn describe_event(event: &ScaffoldEvent, dry_run: bool) -> String {
    let path = event.path.display();
    match (event.outcome, dry_run) {
        (Outcome::Created, false) => format!("Creating {path}"),
        (Outcome::Created, true) => format!("Would create {path}"),
        (Outcome::Exists, _) => match event.kind {
            EntryKind::Directory => format!("{path} already exists"),
            EntryKind::File => format!("{path} already exists."),
        },
        (Outcome::Overwritten, false) => format!("Overwriting {path}"),
        (Outcome::Overwritten, true) => format!("Would overwrite {path}"),
        (Outcome::PermissionsSet, false) => format!("Made {path} executable"),
        (Outcome::PermissionsSet, true) => format!("Would make {path} executable"),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
