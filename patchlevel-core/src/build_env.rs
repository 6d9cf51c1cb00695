//! Marker resolution shared by `build.rs` and its unit tests.
//!
//! Cargo passes `rustc-env` values on a single line, so every value produced
//! here is newline-free.

/// Picks a marker value: an explicit override first, then git when capture is
/// on, else empty. Line breaks in overrides become commas.
pub fn resolve(
    explicit: Option<String>,
    capture: bool,
    from_git: impl FnOnce() -> Option<String>,
) -> String {
    if let Some(value) = explicit {
        return one_line(&value);
    }
    if capture {
        return from_git().map(|v| one_line(&v)).unwrap_or_default();
    }
    String::new()
}

/// `git status --porcelain` output to the dirty flag.
pub fn dirty_flag(porcelain: &str) -> String {
    if porcelain.trim().is_empty() {
        String::new()
    } else {
        "1".to_string()
    }
}

/// Whitespace-separated SHAs joined with commas.
pub fn join_shas(log: &str) -> String {
    log.split_whitespace().collect::<Vec<_>>().join(",")
}

fn one_line(value: &str) -> String {
    value
        .trim()
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn override_wins_over_git() {
        let value = resolve(Some("abc1234".into()), true, || Some("zzz".into()));
        assert_eq!(value, "abc1234");
    }

    #[test]
    fn override_line_breaks_become_commas() {
        let value = resolve(Some("abc1234\ndef5678\r\n0123abc\n".into()), false, || None);
        assert_eq!(value, "abc1234,def5678,0123abc");
        assert!(!value.contains(['\n', '\r']));
    }

    #[test]
    fn empty_override_stays_empty() {
        assert_eq!(resolve(Some(String::new()), true, || Some("1".into())), "");
    }

    #[test]
    fn no_capture_ignores_git() {
        let value = resolve(None, false, || panic!("git must not run"));
        assert_eq!(value, "");
    }

    #[test]
    fn git_failure_is_empty() {
        assert_eq!(resolve(None, true, || None), "");
    }

    #[test]
    fn git_output_is_one_line() {
        assert_eq!(resolve(None, true, || Some("v5.16.3\n".into())), "v5.16.3");
    }

    #[test]
    fn dirty_flag_from_porcelain() {
        assert_eq!(dirty_flag(""), "");
        assert_eq!(dirty_flag("\n"), "");
        assert_eq!(dirty_flag(" M patchlevel-core/src/release.rs"), "1");
    }

    #[test]
    fn unpushed_shas_are_comma_joined() {
        assert_eq!(join_shas("abc1234\ndef5678\n"), "abc1234,def5678");
        assert_eq!(join_shas(""), "");
    }
}
