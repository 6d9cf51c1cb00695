//! Exports working-tree markers to the compiler as `PATCHLEVEL_GIT_*` env vars.
//!
//! Explicit environment values win. Otherwise, with the `git-state` feature,
//! the values are read from `git`; any git failure leaves them empty.

#[path = "src/build_env.rs"]
mod build_env;

use std::env;
use std::process::Command;

const UNCOMMITTED: &str = "PATCHLEVEL_GIT_UNCOMMITTED";
const UNPUSHED: &str = "PATCHLEVEL_GIT_UNPUSHED";
const DESCRIBE: &str = "PATCHLEVEL_GIT_DESCRIBE";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/build_env.rs");
    for var in [UNCOMMITTED, UNPUSHED, DESCRIBE] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let capture = env::var_os("CARGO_FEATURE_GIT_STATE").is_some();
    if capture {
        watch_git_state();
    }

    let uncommitted = build_env::resolve(env::var(UNCOMMITTED).ok(), capture, || {
        git(&["status", "--porcelain", "--untracked-files=no"])
            .map(|out| build_env::dirty_flag(&out))
    });
    let unpushed = build_env::resolve(env::var(UNPUSHED).ok(), capture, || {
        git(&["log", "--format=%h", "@{u}..HEAD"]).map(|out| build_env::join_shas(&out))
    });
    let describe = build_env::resolve(env::var(DESCRIBE).ok(), capture, || {
        git(&["describe", "--tags", "--always"])
    });

    println!("cargo:rustc-env={UNCOMMITTED}={uncommitted}");
    println!("cargo:rustc-env={UNPUSHED}={unpushed}");
    println!("cargo:rustc-env={DESCRIBE}={describe}");
}

/// Reruns on commits, ref moves, pushes, staging, and edits to tracked files.
/// Untracked files never affect the markers, so `target/` is not watched.
fn watch_git_state() {
    if let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]) {
        for path in ["HEAD", "index", "refs", "packed-refs", "logs/HEAD"] {
            println!("cargo:rerun-if-changed={git_dir}/{path}");
        }
    }
    let Some(top) = git(&["rev-parse", "--show-toplevel"]) else {
        return;
    };
    if let Some(files) = git(&["-C", &top, "ls-files"]) {
        for file in files.lines().filter(|f| !f.is_empty()) {
            println!("cargo:rerun-if-changed={top}/{file}");
        }
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
