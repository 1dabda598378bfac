//! CLI interface for startlist.
//!
//! Non-interactive: arguments in, structured output out. `render` is the
//! whole pipeline — load a fetched starter list record, assemble it for a
//! style, and write either the JSON output contract (for a document
//! backend) or a plain-text preview.

mod format;

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::assets::AssetLibrary;
use crate::config::Config;
use crate::model::StarterListRecord;
use crate::{engine, style};

/// startlist — turn fetched starter lists into printable documents.
#[derive(Debug, Parser)]
#[command(name = "startlist")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assemble a starter list record into a document.
    Render {
        /// Path to the starter list record (JSON).
        record: PathBuf,

        /// Style layout name; defaults to the configured style.
        #[arg(long)]
        style: Option<String>,

        /// Directory holding `flags/` and `logos/`; defaults to the
        /// configured assets root.
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List the registered style layouts.
    Styles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The backend-agnostic output contract, as JSON.
    Json,
    /// A human-readable table preview.
    Text,
}

/// Run a parsed command. Errors are user-facing messages.
pub fn run(cli: &Cli, config: &Config) -> Result<(), String> {
    match &cli.command {
        Command::Render {
            record,
            style,
            assets,
            out,
            format,
        } => render(
            record,
            style.as_deref().unwrap_or(&config.default_style),
            assets.as_deref().unwrap_or(&config.assets_root),
            out.as_deref(),
            *format,
        ),
        Command::Styles => {
            for layout in style::STYLES {
                println!(
                    "{:<20} {:?}, {} columns",
                    layout.name,
                    layout.locale,
                    layout.column_count()
                );
            }
            Ok(())
        }
    }
}

fn render(
    record_path: &std::path::Path,
    style_name: &str,
    assets_root: &std::path::Path,
    out: Option<&std::path::Path>,
    format: OutputFormat,
) -> Result<(), String> {
    let layout = style::by_name(style_name)
        .ok_or_else(|| format!("unknown style {style_name:?}; run `startlist styles`"))?;

    let json = fs::read_to_string(record_path)
        .map_err(|e| format!("failed to read {}: {e}", record_path.display()))?;
    let record = StarterListRecord::from_json(&json)
        .map_err(|e| format!("{}: {e}", record_path.display()))?;

    let assets = AssetLibrary::new(assets_root);
    let current_year = jiff::Zoned::now().date().year();
    let list = engine::assemble(&record, layout, &assets, current_year);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&list)
            .map_err(|e| format!("failed to serialize document: {e}"))?,
        OutputFormat::Text => format::render_text(&list),
    };

    match out {
        Some(path) => {
            fs::write(path, rendered.as_bytes())
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Wrote {} rows to {}", list.rows.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").map_err(|e| format!("failed to write output: {e}"))?;
        }
    }
    Ok(())
}
