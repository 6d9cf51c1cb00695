use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, read-only list of locally applied patch descriptions.
///
/// Entries keep the order in which they were listed. The log exposes no way to
/// append or clear entries once built; the count is always the live length.
/// Blank entries carry no description and are dropped on construction, so the
/// log never holds a terminator-like placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct PatchLog(Vec<String>);

impl PatchLog {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(Into::into)
                .filter(|e: &String| !e.trim().is_empty())
                .collect(),
        )
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns a new log with `markers` placed ahead of the existing entries.
    pub fn with_leading<I, S>(self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(markers.into_iter().map(Into::into).chain(self.0))
    }
}

impl From<Vec<String>> for PatchLog {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl<'a> IntoIterator for &'a PatchLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PatchLog {
    /// One entry per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.0 {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
