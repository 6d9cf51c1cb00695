//! Release and minimum-compatible API numbers.
//!
//! The API triple describes the oldest release whose extension code still
//! loads against this build without a rebuild ("compatible" meaning binary
//! and API compatible for an out-of-the-box build). It normally stays at
//! `X.Y.0` across maintenance releases.

use patchlevel_types::VersionTriple;

/// The distributed release.
pub const RELEASE: VersionTriple = VersionTriple::new(5, 16, 3);

/// Earliest release extension code may have been built against.
pub const MIN_COMPATIBLE_API: VersionTriple = VersionTriple::new(5, 16, 0);

/// Legacy name for the release minor number.
pub const PATCHLEVEL: u32 = RELEASE.minor;

/// Legacy name for the release subversion.
pub const SUBVERSION: u32 = RELEASE.subversion;

const _: () = assert!(
    MIN_COMPATIBLE_API.major < RELEASE.major
        || (MIN_COMPATIBLE_API.major == RELEASE.major && MIN_COMPATIBLE_API.minor <= RELEASE.minor),
    "minimum compatible API generation must not exceed the release generation"
);
