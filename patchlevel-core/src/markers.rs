//! Working-tree markers captured by the build script.

/// Entry prepended to the log when the tree had uncommitted changes.
pub const UNCOMMITTED_CHANGES: &str = "uncommitted-changes";

/// State of the source tree at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMarkers {
    pub uncommitted_changes: bool,
    pub unpushed_commits: Vec<String>,
    pub describe: Option<String>,
}

impl BuildMarkers {
    /// Markers recorded for this build by `build.rs`.
    pub fn from_build_env() -> Self {
        Self::parse(
            env!("PATCHLEVEL_GIT_UNCOMMITTED"),
            env!("PATCHLEVEL_GIT_UNPUSHED"),
            env!("PATCHLEVEL_GIT_DESCRIBE"),
        )
    }

    /// Decodes the raw values: a truthy flag, a comma or whitespace separated
    /// commit list, and a describe string.
    pub fn parse(uncommitted: &str, unpushed: &str, describe: &str) -> Self {
        let uncommitted_changes = matches!(
            uncommitted.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );
        let unpushed_commits = unpushed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let describe = Some(describe.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            uncommitted_changes,
            unpushed_commits,
            describe,
        }
    }

    /// Leading log entries, in order: the dirty-tree flag, then each
    /// unpushed commit.
    pub fn leading_entries(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.unpushed_commits.len() + 1);
        if self.uncommitted_changes {
            out.push(UNCOMMITTED_CHANGES.to_string());
        }
        out.extend(self.unpushed_commits.iter().cloned());
        out
    }
}
