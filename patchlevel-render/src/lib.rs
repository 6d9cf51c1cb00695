//! Rendering helpers (plain text and markdown) for version reports.

use patchlevel_types::VersionReport;

/// `--version` style output.
///
/// The first line is `<name> v<release> (<patchnum>)`, the second the
/// minimum compatible API. With `show_patches` the patch log follows, one
/// entry per line.
pub fn render_version_text(report: &VersionReport, show_patches: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} v{} ({})\n",
        report.tool.name, report.release, report.patchnum
    ));
    out.push_str(&format!(
        "Minimum compatible API: v{}\n",
        report.min_compatible_api
    ));

    if show_patches && !report.patches.is_empty() {
        out.push_str("\nLocally applied patches:\n");
        for entry in &report.patches {
            out.push_str(&format!("\t{}\n", entry));
        }
    }
    out
}

/// The bare patch log, one entry per line.
pub fn render_patches_text(report: &VersionReport) -> String {
    report.patches.to_string()
}

/// The patch log as a markdown bullet list.
pub fn render_patches_md(report: &VersionReport) -> String {
    if report.patches.is_empty() {
        return "_No local patches._\n".to_string();
    }
    let mut out = String::new();
    for entry in &report.patches {
        out.push_str(&format!("- {}\n", entry));
    }
    out
}

pub fn render_version_md(report: &VersionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} v{}\n\n", report.tool.name, report.release));
    out.push_str(&format!("- Variant: `{}`\n", report.variant));
    out.push_str(&format!("- Patchnum: `{}`\n", report.patchnum));
    out.push_str(&format!(
        "- Minimum compatible API: `{}`\n",
        report.min_compatible_api
    ));
    out.push_str(&format!("- Local patches: {}\n\n", report.patch_count()));

    out.push_str("## Local patches\n\n");
    if report.patches.is_empty() {
        out.push_str("_No local patches._\n");
        return out;
    }
    for (i, entry) in report.patches.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, entry));
    }
    out
}
