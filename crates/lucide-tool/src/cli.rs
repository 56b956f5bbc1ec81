//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

/// Generates the Lucide icon registry and tracks upstream releases.
#[derive(Debug, Parser)]
#[command(name = "lucide-tool")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project root; relative paths are resolved against it
    #[arg(long, global = true, default_value = ".")]
    pub workspace: Utf8PathBuf,

    /// Path to the config file (default: <workspace>/lucide.config.json)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Output format
    #[arg(long = "output-format", global = true, value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the icon registry from the icon directory
    Generate {
        /// Icon directory (default: iconsDir from config)
        source: Option<Utf8PathBuf>,

        /// Output file (default: output from config)
        output: Option<Utf8PathBuf>,

        /// Artifact format (default: format from config)
        #[arg(long, value_enum)]
        format: Option<ArtifactFormat>,
    },

    /// Check whether a newer upstream release exists
    Check,

    /// Download the latest release, regenerate, and update changelog and version file
    Update {
        /// Report what would change without writing anything
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Title the changelog entry with the next minor version instead of "Unreleased"
        #[arg(long)]
        release: bool,
    },

    /// Print the changelog notes for a version
    ReleaseNotes {
        /// Version to print (default: latest version in the changelog)
        version: Option<String>,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

/// Generated artifact format.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Rust module with render functions
    Rust,
    /// JSON manifest
    Json,
}
