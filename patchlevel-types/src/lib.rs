//! Shared DTOs (schemas-as-code) for the patchlevel workspace.
//!
//! # Design constraints
//! - These types are printed and serialized for downstream tooling.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod patch_log;
pub mod report;
pub mod triple;

pub use patch_log::PatchLog;
pub use report::{ReportError, ToolInfo, VersionReport};
pub use triple::{ParseTripleError, VersionTriple};

/// Schema identifiers.
pub mod schema {
    pub const PATCHLEVEL_REPORT_V1: &str = "patchlevel.report.v1";
}
