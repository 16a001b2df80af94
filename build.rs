//! Embeds the commit hash and build date for `darkfort --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Short commit hash from `BUILD_COMMIT` (CI) or git (local builds).
fn git_commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        let commit = commit.trim();
        if !commit.is_empty() {
            return short_hash(commit);
        }
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| short_hash(s.trim()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// CI may hand over a full SHA, and git lengthens ambiguous short ones.
fn short_hash(commit: &str) -> String {
    commit.chars().take(7).collect()
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let contents = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        git_commit(),
        build_date()
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), contents)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
