mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use config::{ConfigMerger, MergedConfig, OutputFormat};
use patchlevel_core::{VersionMetadata, VersionTriple};
use patchlevel_render::{
    render_patches_md, render_patches_text, render_version_md, render_version_text,
};
use patchlevel_types::{ToolInfo, VersionReport};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "patchlevel",
    about = "Report the release, API compatibility window, and local patches of this build.",
    disable_version_flag = true
)]
struct Cli {
    /// Print the release and the local patch log, then exit.
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    /// Config file (default: ./patchlevel.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the release, minimum compatible API, and optionally the patch log.
    Version(VersionArgs),
    /// List locally applied patches, one per line.
    Patches(PatchesArgs),
    /// Check whether extension code built against VERSION loads without a rebuild.
    Compat(CompatArgs),
    /// Filter installed releases down to those this build may still load from.
    Lineage(LineageArgs),
}

#[derive(Debug, Default, Parser)]
struct VersionArgs {
    /// Include the local patch log.
    #[arg(long, overrides_with = "no_patches")]
    patches: bool,

    /// Omit the local patch log.
    #[arg(long, overrides_with = "patches")]
    no_patches: bool,

    /// Output format (text, json, markdown).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Parser)]
struct PatchesArgs {
    /// Output format (text, json, markdown).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Parser)]
struct CompatArgs {
    /// Release the extension was built against (e.g. "5.16.1").
    built_against: String,
}

#[derive(Debug, Parser)]
struct LineageArgs {
    /// Installed releases to consider.
    #[arg(required = true)]
    candidates: Vec<String>,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new("."))
            .context("load patchlevel.toml config")?,
    };
    let merger = ConfigMerger::new(file_config);

    if cli.version {
        return cmd_version(merger, VersionArgs::default());
    }

    match cli.cmd {
        Some(Command::Version(args)) => cmd_version(merger, args),
        Some(Command::Patches(args)) => cmd_patches(merger, args),
        Some(Command::Compat(args)) => cmd_compat(args),
        Some(Command::Lineage(args)) => cmd_lineage(args),
        None => {
            debug!("no subcommand given; printing version");
            cmd_version(merger, VersionArgs::default())
        }
    }
}

fn cmd_version(merger: ConfigMerger, args: VersionArgs) -> anyhow::Result<ExitCode> {
    let show_patches = match (args.patches, args.no_patches) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let merged = merger.merge_report_args(show_patches, args.format);
    debug!(
        "merged config: show_patches={}, format={:?}, name={}",
        merged.show_patches, merged.format, merged.name
    );

    let report = build_report(&merged);
    let out = match merged.format {
        OutputFormat::Text => render_version_text(&report, merged.show_patches),
        OutputFormat::Markdown => render_version_md(&report),
        OutputFormat::Json => to_json(&report)?,
    };
    print!("{}", out);
    Ok(ExitCode::SUCCESS)
}

fn cmd_patches(merger: ConfigMerger, args: PatchesArgs) -> anyhow::Result<ExitCode> {
    let merged = merger.merge_report_args(None, args.format);
    let report = build_report(&merged);
    match merged.format {
        OutputFormat::Json => print!("{}", to_json(&report.patches)?),
        OutputFormat::Markdown => print!("{}", render_patches_md(&report)),
        OutputFormat::Text => print!("{}", render_patches_text(&report)),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_compat(args: CompatArgs) -> anyhow::Result<ExitCode> {
    let built_against = parse_version(&args.built_against)?;
    let metadata = VersionMetadata::current();

    match metadata.check_extension(built_against) {
        Ok(()) => {
            println!(
                "compatible: {} is within [{}, {}]",
                built_against,
                metadata.min_compatible_api(),
                metadata.release()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            info!("extension rejected: {}", e);
            println!("incompatible: {}", e);
            Ok(ExitCode::from(2))
        }
    }
}

fn cmd_lineage(args: LineageArgs) -> anyhow::Result<ExitCode> {
    let candidates = args
        .candidates
        .iter()
        .map(|s| parse_version(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for version in VersionMetadata::current().compatible_lineage(&candidates) {
        println!("{}", version);
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_version(raw: &str) -> anyhow::Result<VersionTriple> {
    raw.parse::<VersionTriple>()
        .with_context(|| format!("parse version '{}'", raw))
}

fn build_report(merged: &MergedConfig) -> VersionReport {
    VersionMetadata::current()
        .report(tool_info(&merged.name))
        .generated_at(Utc::now())
}

fn tool_info(name: &str) -> ToolInfo {
    ToolInfo {
        name: name.to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

fn to_json<T: serde::Serialize>(v: &T) -> anyhow::Result<String> {
    let mut s = serde_json::to_string_pretty(v).context("serialize json")?;
    s.push('\n');
    Ok(s)
}
