use crate::{PatchLog, VersionTriple};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable version report (`patchlevel.report.v1`).
///
/// `patch_count` appears on the wire but is never stored: it is written from
/// the live patch list, and a document whose count disagrees with its list is
/// rejected on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReportWire", into = "ReportWire")]
pub struct VersionReport {
    pub schema: String,
    pub tool: ToolInfo,

    /// Build variant the metadata was assembled for, e.g. "full".
    pub variant: String,

    /// Source tree identifier (git describe or an `UNKNOWN-*` marker).
    pub patchnum: String,

    pub release: VersionTriple,
    pub min_compatible_api: VersionTriple,
    pub patches: PatchLog,
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("patch_count {declared} does not match the {actual} listed patches")]
    PatchCountMismatch { declared: usize, actual: usize },
}

impl VersionReport {
    pub fn new(
        tool: ToolInfo,
        variant: impl Into<String>,
        patchnum: impl Into<String>,
        release: VersionTriple,
        min_compatible_api: VersionTriple,
        patches: PatchLog,
    ) -> Self {
        Self {
            schema: crate::schema::PATCHLEVEL_REPORT_V1.to_string(),
            tool,
            variant: variant.into(),
            patchnum: patchnum.into(),
            release,
            min_compatible_api,
            patches,
            generated_at: None,
        }
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn patch_count(&self) -> usize {
        self.patches.count()
    }
}

/// On-disk shape of [`VersionReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReportWire {
    schema: String,
    tool: ToolInfo,
    variant: String,
    patchnum: String,
    release: VersionTriple,
    min_compatible_api: VersionTriple,

    #[serde(default)]
    patches: PatchLog,

    /// Optional on read; always written.
    #[serde(default)]
    patch_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
}

impl From<VersionReport> for ReportWire {
    fn from(r: VersionReport) -> Self {
        let patch_count = Some(r.patch_count());
        Self {
            schema: r.schema,
            tool: r.tool,
            variant: r.variant,
            patchnum: r.patchnum,
            release: r.release,
            min_compatible_api: r.min_compatible_api,
            patches: r.patches,
            patch_count,
            generated_at: r.generated_at,
        }
    }
}

impl TryFrom<ReportWire> for VersionReport {
    type Error = ReportError;

    fn try_from(w: ReportWire) -> Result<Self, Self::Error> {
        if let Some(declared) = w.patch_count {
            let actual = w.patches.count();
            if declared != actual {
                return Err(ReportError::PatchCountMismatch { declared, actual });
            }
        }
        Ok(Self {
            schema: w.schema,
            tool: w.tool,
            variant: w.variant,
            patchnum: w.patchnum,
            release: w.release,
            min_compatible_api: w.min_compatible_api,
            patches: w.patches,
            generated_at: w.generated_at,
        })
    }
}
