use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;

/// Line that closes the literal patch list.
const END_MARKER: &str = "// end of local patches";

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by patchlevel.
    PrintSchemas,
    /// Append entries to the local patch list, just above the end marker.
    AddPatch {
        /// Patch descriptions, e.g. "Vendor Patch45: Fix foo (RT#12345)".
        #[arg(required = true)]
        entries: Vec<String>,

        #[arg(long, default_value = "patchlevel-core/src/local_patches.rs")]
        file: Utf8PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", patchlevel_types::schema::PATCHLEVEL_REPORT_V1);
        }
        Command::AddPatch { entries, file } => {
            add_patches(&file, &entries)?;
            println!("added {} patch entries to {file}", entries.len());
        }
    }
    Ok(())
}

/// Rewrites `file` with `entries` inserted, keeping the previous contents in
/// `<file>.bak`.
fn add_patches(file: &Utf8Path, entries: &[String]) -> anyhow::Result<()> {
    let source = fs::read_to_string(file).with_context(|| format!("read {file}"))?;
    let updated = insert_entries(&source, entries).with_context(|| format!("update {file}"))?;

    let staged = file.with_extension("rs.new");
    let backup = file.with_extension("rs.bak");
    fs::write(&staged, updated)?;
    if backup.exists() {
        fs::remove_file(&backup)?;
    }
    fs::rename(file, &backup)?;
    fs::rename(&staged, file)?;
    Ok(())
}

fn insert_entries(source: &str, entries: &[String]) -> anyhow::Result<String> {
    let mut out = String::with_capacity(source.len() + entries.len() * 80);
    let mut inserted = false;

    for line in source.split_inclusive('\n') {
        if !inserted && line.trim() == END_MARKER {
            let indent = &line[..line.len() - line.trim_start().len()];
            for entry in entries {
                let entry = entry.trim();
                if entry.is_empty() {
                    anyhow::bail!("patch descriptions must not be blank");
                }
                if entry.chars().any(char::is_control) {
                    anyhow::bail!(
                        "patch description {entry:?} must be a single line without control characters"
                    );
                }
                out.push_str(&format!("{indent}\"{}\",\n", escape(entry)));
            }
            inserted = true;
        }
        out.push_str(line);
    }

    if !inserted {
        anyhow::bail!("end marker `{END_MARKER}` not found");
    }
    Ok(out)
}

fn escape(entry: &str) -> String {
    entry.replace('\\', "\\\\").replace('"', "\\\"")
}
