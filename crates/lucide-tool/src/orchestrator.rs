//! Main orchestration logic.

use crate::cli::{ArtifactFormat, Args, Command, OutputFormat};
use crate::config::{resolve, ConfigError, ToolConfig};
use crate::output::{format_generation, format_release_notes, to_json, UpdateResult};
use camino::{Utf8Path, Utf8PathBuf};
use lucide_codegen::{
    generate_with, list_icon_names, Emitter, GenerateError, GenerationResult, JsonEmitter,
    RustEmitter,
};
use lucide_release::{
    download_and_extract, next_minor_version, read_version, write_version, Changelog,
    ChangelogEntry, Release, ReleaseClient, ReleaseError,
};
use std::collections::BTreeSet;
use thiserror::Error;

/// Environment variable holding the GitHub token.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base URL.
const API_URL_ENV: &str = "GITHUB_API_URL";

/// Changelog title used when no release version is requested.
const UNRELEASED: &str = "Unreleased";

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The workspace path could not be resolved.
    #[error("invalid workspace: {0}")]
    Workspace(String),

    /// The config file is unreadable or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generation failed.
    #[error("failed to generate icons: {0}")]
    Generate(#[from] GenerateError),

    /// A release step failed.
    #[error("{context}: {source}")]
    Release {
        /// What was being done.
        context: &'static str,
        /// The underlying error.
        #[source]
        source: ReleaseError,
    },

    /// The result could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn release_err(context: &'static str) -> impl FnOnce(ReleaseError) -> OrchestratorError {
    move |source| OrchestratorError::Release { context, source }
}

/// Runs the selected subcommand and returns what to print on stdout.
pub async fn run(args: Args) -> Result<String, OrchestratorError> {
    let workspace = resolve_workspace(&args.workspace)?;
    let config = ToolConfig::load(&workspace, args.config.as_deref())?.resolve_paths(&workspace);

    match args.command {
        Command::Generate {
            source,
            output,
            format,
        } => {
            let source = source.map_or_else(|| config.icons_dir.clone(), |p| resolve(&workspace, &p));
            let format = format.unwrap_or(config.format);
            let emitter = emitter(format, &config);
            let output = match output {
                Some(output) => resolve(&workspace, &output),
                // A format switch keeps the configured location but not its extension.
                None if format != config.format => {
                    config.output.with_extension(emitter.file_extension())
                }
                None => config.output.clone(),
            };

            let result = run_generate(&source, &output, emitter.as_ref())?;
            Ok(format_generation(&result, args.output_format)?)
        }
        Command::Check => run_check(&config).await,
        Command::Update { dry_run, release } => run_update(&config, dry_run, release).await,
        Command::ReleaseNotes { version } => {
            run_release_notes(&config, version.as_deref(), args.output_format)
        }
    }
}

fn resolve_workspace(workspace: &Utf8Path) -> Result<Utf8PathBuf, OrchestratorError> {
    if workspace.is_absolute() {
        return Ok(workspace.to_owned());
    }
    let cwd = std::env::current_dir().map_err(|e| OrchestratorError::Workspace(e.to_string()))?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| OrchestratorError::Workspace(e.to_string()))?;
    Ok(cwd.join(workspace))
}

fn emitter(format: ArtifactFormat, config: &ToolConfig) -> Box<dyn Emitter> {
    match format {
        ArtifactFormat::Rust => Box::new(RustEmitter::new(config.runtime_path.clone())),
        ArtifactFormat::Json => Box::new(JsonEmitter),
    }
}

/// Regenerates the artifact from `source` into `output`.
fn run_generate(
    source: &Utf8Path,
    output: &Utf8Path,
    emitter: &dyn Emitter,
) -> Result<GenerationResult, OrchestratorError> {
    eprintln!("Regenerating icons from {source}...");
    Ok(generate_with(source, output, emitter)?)
}

fn client() -> Result<ReleaseClient, OrchestratorError> {
    let token = std::env::var(TOKEN_ENV).ok();
    let client = ReleaseClient::new(token).map_err(release_err("failed to create HTTP client"))?;
    Ok(match std::env::var(API_URL_ENV) {
        Ok(api_base) if !api_base.is_empty() => client.with_api_base(api_base),
        _ => client,
    })
}

/// Reads the current tag and fetches the latest release.
async fn current_and_latest(
    config: &ToolConfig,
    client: &ReleaseClient,
) -> Result<(String, Release), OrchestratorError> {
    let current_tag = read_version(&config.version_file)
        .map_err(release_err("failed to get current version"))?;
    eprintln!("Current version: {current_tag}");

    let release = client
        .latest_release(&config.upstream)
        .await
        .map_err(release_err("failed to fetch latest release"))?;
    eprintln!("Latest version: {}", release.tag_name);

    Ok((current_tag, release))
}

async fn run_check(config: &ToolConfig) -> Result<String, OrchestratorError> {
    let client = client()?;
    let (current_tag, release) = current_and_latest(config, &client).await?;

    let result = UpdateResult {
        has_updates: current_tag != release.tag_name,
        current_tag,
        latest_tag: release.tag_name,
        release_url: release.html_url,
        ..UpdateResult::default()
    };

    if result.has_updates {
        eprintln!(
            "Update available: {} -> {}",
            result.current_tag, result.latest_tag
        );
    } else {
        eprintln!("Already up to date");
    }

    Ok(to_json(&result)?)
}

async fn run_update(
    config: &ToolConfig,
    dry_run: bool,
    release_version: bool,
) -> Result<String, OrchestratorError> {
    let client = client()?;
    let (current_tag, release) = current_and_latest(config, &client).await?;

    let mut result = UpdateResult {
        has_updates: current_tag != release.tag_name,
        current_tag: current_tag.clone(),
        latest_tag: release.tag_name.clone(),
        release_url: release.html_url.clone(),
        release_notes: release.body.clone().unwrap_or_default(),
        ..UpdateResult::default()
    };

    if !result.has_updates {
        eprintln!("Already up to date");
        return Ok(to_json(&result)?);
    }

    eprintln!("\nUpdating from {current_tag} to {}...", release.tag_name);
    if dry_run {
        eprintln!("DRY RUN: would download and update to {}", release.tag_name);
        return Ok(to_json(&result)?);
    }

    let asset = release
        .icons_asset()
        .map_err(release_err("failed to find icons asset"))?;

    let before = existing_icon_names(&config.icons_dir)?;
    eprintln!("Downloading {}...", asset.name);
    download_and_extract(&client, asset, &config.icons_dir)
        .await
        .map_err(release_err("failed to download icons"))?;
    let after = list_icon_names(&config.icons_dir)?;

    let emitter = emitter(config.format, config);
    let generated = run_generate(&config.icons_dir, &config.output, emitter.as_ref())?;
    eprintln!("Generated {} icons", generated.icons_generated);

    let (added, removed) = diff_names(&before, &after);
    result.icons_added = added;
    result.icons_removed = removed;
    eprintln!("Icons added: {added}, removed: {removed}");

    let changelog = Changelog::new(config.changelog.clone(), config.project.clone());
    let version = if release_version {
        let latest = changelog.latest_version().ok();
        next_minor_version(latest.as_deref()).map_err(release_err("failed to compute next version"))?
    } else {
        UNRELEASED.to_string()
    };

    let entry = ChangelogEntry {
        version: version.clone(),
        date: chrono::Local::now().date_naive(),
        current_tag,
        new_tag: release.tag_name.clone(),
        icons_added: added,
        icons_removed: removed,
    };
    changelog
        .add_entry(&entry)
        .map_err(release_err("failed to update changelog"))?;
    if release_version {
        changelog
            .add_version_link(&version)
            .map_err(release_err("failed to add version link"))?;
    }
    result.changelog_path = config.changelog.to_string();
    eprintln!("Updated {}", config.changelog);

    write_version(&config.version_file, &release.tag_name)
        .map_err(release_err("failed to update version file"))?;
    eprintln!("Updated {}", config.version_file);

    eprintln!("\nUpdate complete!");
    Ok(to_json(&result)?)
}

fn run_release_notes(
    config: &ToolConfig,
    version: Option<&str>,
    format: OutputFormat,
) -> Result<String, OrchestratorError> {
    let changelog = Changelog::new(config.changelog.clone(), config.project.clone());
    let version = match version {
        Some(version) => version.to_string(),
        None => changelog
            .latest_version()
            .map_err(release_err("failed to find latest version"))?,
    };

    let notes = changelog
        .release_notes(&version)
        .map_err(release_err("failed to read release notes"))?;
    Ok(format_release_notes(&version, &notes, format)?)
}

/// Icon names currently in `dir`; an absent directory has none.
fn existing_icon_names(dir: &Utf8Path) -> Result<Vec<String>, OrchestratorError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    Ok(list_icon_names(dir)?)
}

/// Counts names only in `after` (added) and only in `before` (removed).
fn diff_names(before: &[String], after: &[String]) -> (usize, usize) {
    let before: BTreeSet<&str> = before.iter().map(String::as_str).collect();
    let after: BTreeSet<&str> = after.iter().map(String::as_str).collect();
    (
        after.difference(&before).count(),
        before.difference(&after).count(),
    )
}
