use crate::compat::{CompatError, CompatWindow};
use crate::local_patches::LOCAL_PATCHES;
use crate::markers::BuildMarkers;
use crate::release::{MIN_COMPATIBLE_API, RELEASE};
use crate::variant::BuildVariant;
use patchlevel_types::{PatchLog, ToolInfo, VersionReport, VersionTriple};
use std::sync::LazyLock;
use tracing::debug;

static CURRENT: LazyLock<VersionMetadata> = LazyLock::new(|| {
    let metadata = VersionMetadata::assemble(
        BuildVariant::CURRENT,
        RELEASE,
        MIN_COMPATIBLE_API,
        &BuildMarkers::from_build_env(),
        LOCAL_PATCHES,
    );
    debug!(
        variant = metadata.variant.name(),
        release = %metadata.release,
        patches = metadata.patch_count(),
        "assembled version metadata"
    );
    metadata
});

/// Release, API-compatibility, and patch provenance of this build.
///
/// Built once and read-only afterwards. Use [`VersionMetadata::current`] for
/// the process-wide instance; [`VersionMetadata::assemble`] exists for tools
/// and tests that need a specific variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMetadata {
    variant: BuildVariant,
    release: VersionTriple,
    min_compatible_api: VersionTriple,
    patchnum: String,
    patches: PatchLog,
}

impl VersionMetadata {
    pub fn current() -> &'static VersionMetadata {
        &CURRENT
    }

    pub fn assemble(
        variant: BuildVariant,
        release: VersionTriple,
        min_compatible_api: VersionTriple,
        markers: &BuildMarkers,
        vendor: &[&str],
    ) -> Self {
        let patchnum = match variant.unknown_marker() {
            Some(marker) => marker.to_string(),
            None => markers
                .describe
                .clone()
                .unwrap_or_else(|| release.to_string()),
        };
        Self {
            variant,
            release,
            min_compatible_api,
            patchnum,
            patches: variant.assemble(markers, vendor),
        }
    }

    pub fn release(&self) -> VersionTriple {
        self.release
    }

    pub fn min_compatible_api(&self) -> VersionTriple {
        self.min_compatible_api
    }

    pub fn patch_log(&self) -> &PatchLog {
        &self.patches
    }

    /// Always the live length of [`Self::patch_log`].
    pub fn patch_count(&self) -> usize {
        self.patches.count()
    }

    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    pub fn patchnum(&self) -> &str {
        &self.patchnum
    }

    pub fn compat_window(&self) -> CompatWindow {
        CompatWindow::new(self.min_compatible_api, self.release)
    }

    pub fn accepts_extension(&self, built_against: VersionTriple) -> bool {
        self.compat_window().accepts(built_against)
    }

    pub fn check_extension(&self, built_against: VersionTriple) -> Result<(), CompatError> {
        self.compat_window().check(built_against)
    }

    pub fn compatible_lineage(&self, candidates: &[VersionTriple]) -> Vec<VersionTriple> {
        self.compat_window().lineage(candidates)
    }

    pub fn report(&self, tool: ToolInfo) -> VersionReport {
        VersionReport::new(
            tool,
            self.variant.name(),
            self.patchnum.clone(),
            self.release,
            self.min_compatible_api,
            self.patches.clone(),
        )
    }
}
