//! Build-time version metadata for the host program.
//!
//! Exposes the release triple, the minimum API triple extension code may have
//! been built against, and the log of locally applied distributor patches.
//! Everything is fixed when the crate is compiled:
//!
//! - the build variant comes from Cargo features (`minimal`, `micro`);
//! - working-tree markers come from `build.rs` (see the `git-state` feature);
//! - vendor patches come from the literal list in [`local_patches`].
//!
//! ```
//! let release = patchlevel_core::release();
//! assert_eq!(patchlevel_core::patch_count(), patchlevel_core::patch_log().len());
//! assert!(patchlevel_core::min_compatible_api() <= release);
//! ```

#[cfg(test)]
mod build_env;
pub mod compat;
pub mod local_patches;
pub mod markers;
pub mod metadata;
pub mod release;
pub mod variant;

pub use compat::{CompatError, CompatWindow};
pub use markers::BuildMarkers;
pub use metadata::VersionMetadata;
pub use patchlevel_types::{PatchLog, VersionTriple};
pub use release::{MIN_COMPATIBLE_API, PATCHLEVEL, RELEASE, SUBVERSION};
pub use variant::BuildVariant;

pub fn release() -> VersionTriple {
    VersionMetadata::current().release()
}

pub fn min_compatible_api() -> VersionTriple {
    VersionMetadata::current().min_compatible_api()
}

pub fn patch_log() -> &'static PatchLog {
    VersionMetadata::current().patch_log()
}

pub fn patch_count() -> usize {
    VersionMetadata::current().patch_count()
}
