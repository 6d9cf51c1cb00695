//! Extension compatibility against the release/API window.
//!
//! Extension code built against any release in `[min_compatible_api, release]`
//! loads without a rebuild. Non-default host options can break this more
//! often than the numbers suggest; the window only covers stock builds.

use patchlevel_types::VersionTriple;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatError {
    /// Built against a release older than the API floor.
    #[error("extension built against {built_against} predates the minimum compatible API {min_api}; rebuild it")]
    TooOld {
        built_against: VersionTriple,
        min_api: VersionTriple,
    },

    /// Built against a release newer than this host.
    #[error("extension built against {built_against} is newer than this release {release}")]
    TooNew {
        built_against: VersionTriple,
        release: VersionTriple,
    },
}

/// Inclusive `[min_api, release]` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatWindow {
    pub min_api: VersionTriple,
    pub release: VersionTriple,
}

impl CompatWindow {
    pub const fn new(min_api: VersionTriple, release: VersionTriple) -> Self {
        Self { min_api, release }
    }

    pub fn check(&self, built_against: VersionTriple) -> Result<(), CompatError> {
        if built_against < self.min_api {
            return Err(CompatError::TooOld {
                built_against,
                min_api: self.min_api,
            });
        }
        if built_against > self.release {
            return Err(CompatError::TooNew {
                built_against,
                release: self.release,
            });
        }
        Ok(())
    }

    pub fn accepts(&self, built_against: VersionTriple) -> bool {
        self.check(built_against).is_ok()
    }

    /// Older installed releases whose libraries this build may still load:
    /// accepted, strictly older than the release, deduplicated, newest first.
    pub fn lineage(&self, candidates: &[VersionTriple]) -> Vec<VersionTriple> {
        let mut out: Vec<VersionTriple> = candidates
            .iter()
            .copied()
            .filter(|v| *v < self.release && self.accepts(*v))
            .collect();
        out.sort_unstable_by(|a, b| b.cmp(a));
        out.dedup();
        out
    }
}
