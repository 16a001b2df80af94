//! Version details baked in by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `0.1.0 (2026-01-31, abc1234)`
pub fn version_string() -> String {
    format!(
        "{} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(
            BUILD_COMMIT == "unknown" || BUILD_COMMIT.chars().count() <= 7,
            "commit {:?} is not a short hash",
            BUILD_COMMIT
        );
        assert!(!BUILD_COMMIT.is_empty());
    }

    #[test]
    fn test_version_string_includes_package_version() {
        assert!(version_string().starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version_string().contains(BUILD_DATE));
    }
}
