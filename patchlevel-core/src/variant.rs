//! Build variants and the patch-log assembly each one uses.
//!
//! Exactly one variant is compiled in, picked by Cargo features. Every variant
//! produces the same [`PatchLog`] shape.

use crate::markers::BuildMarkers;
use patchlevel_types::PatchLog;

#[cfg(all(feature = "minimal", feature = "micro"))]
compile_error!("features `minimal` and `micro` select different build variants; enable at most one");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    /// Regular host build: tree markers followed by the vendor patch list.
    Full,
    /// Reduced bootstrap build.
    Minimal,
    /// Reduced embedded build.
    Micro,
}

impl BuildVariant {
    #[cfg(feature = "minimal")]
    pub const CURRENT: BuildVariant = BuildVariant::Minimal;
    #[cfg(all(feature = "micro", not(feature = "minimal")))]
    pub const CURRENT: BuildVariant = BuildVariant::Micro;
    #[cfg(not(any(feature = "minimal", feature = "micro")))]
    pub const CURRENT: BuildVariant = BuildVariant::Full;

    pub fn name(self) -> &'static str {
        match self {
            BuildVariant::Full => "full",
            BuildVariant::Minimal => "minimal",
            BuildVariant::Micro => "micro",
        }
    }

    /// The fixed `UNKNOWN-*` marker reported by reduced variants.
    pub fn unknown_marker(self) -> Option<&'static str> {
        match self {
            BuildVariant::Full => None,
            BuildVariant::Minimal => Some("UNKNOWN-minimal"),
            BuildVariant::Micro => Some("UNKNOWN-micro"),
        }
    }

    /// Builds the patch log for this variant.
    ///
    /// Reduced variants ignore both `markers` and `vendor`; the two shapes are
    /// never blended.
    pub fn assemble(self, markers: &BuildMarkers, vendor: &[&str]) -> PatchLog {
        match self.unknown_marker() {
            Some(marker) => assemble_unknown(marker),
            None => assemble_full(markers, vendor),
        }
    }
}

fn assemble_full(markers: &BuildMarkers, vendor: &[&str]) -> PatchLog {
    PatchLog::from_entries(vendor.iter().copied()).with_leading(markers.leading_entries())
}

fn assemble_unknown(marker: &str) -> PatchLog {
    PatchLog::from_entries([marker])
}
