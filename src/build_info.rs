//! Compile-time build metadata for the status report

use serde::Serialize;

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(s) => s,
        None => "unknown",
    }
}

/// UTC time of the build, e.g. "2026-01-31T12:00:00Z"
pub const BUILD_TIMESTAMP: &str = or_unknown(option_env!("FLOWRATE_BUILD_TIMESTAMP"));

/// Cargo profile the binary was built with ("debug" or "release")
pub const BUILD_PROFILE: &str = or_unknown(option_env!("FLOWRATE_BUILD_PROFILE"));

/// Target triple
pub const BUILD_TARGET: &str = or_unknown(option_env!("FLOWRATE_BUILD_TARGET"));

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
    pub target: &'static str,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            profile: BUILD_PROFILE,
            target: BUILD_TARGET,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// e.g. "flowrate 1.0.0 (release, x86_64-unknown-linux-gnu, built 2026-01-31T12:00:00Z)"
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({}, {}, built {})",
            self.name, self.version, self.profile, self.target, self.build_timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_unknown() {
        assert_eq!(or_unknown(Some("release")), "release");
        assert_eq!(or_unknown(None), "unknown");
    }

    #[test]
    fn test_summary() {
        let info = BuildInfo {
            name: "flowrate",
            version: "1.0.0",
            profile: "release",
            target: "x86_64-unknown-linux-gnu",
            build_timestamp: "2026-01-31T12:00:00Z",
        };
        assert_eq!(
            info.summary(),
            "flowrate 1.0.0 (release, x86_64-unknown-linux-gnu, built 2026-01-31T12:00:00Z)"
        );
    }

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "flowrate");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.profile.is_empty());
        assert!(info.summary().starts_with("flowrate "));
    }
}
