use anyhow::{Context, Result, bail};
use regex::Regex;

/// Platform information for asset selection
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "macos".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    /// The naming token embedded in a release archive's filename for
    /// this platform.
    ///
    /// "darwin" is accepted alongside "macos" because that is what the
    /// platform is called in the workflow environments this action
    /// originally ran under.
    pub fn release_suffix(&self) -> Result<&'static str> {
        match self.os.as_str() {
            "linux" => Ok("linux"),
            "macos" | "darwin" => Ok("macos"),
            other => bail!("Unknown or unsupported platform: {}", other),
        }
    }
}

/// Compiled archive-name patterns for one platform, one per archive
/// category (the core tool and the json/yaml plugins).
#[derive(Debug, Clone)]
pub struct ReleasePatterns {
    pub core: Regex,
    pub json: Regex,
    pub yaml: Regex,
    suffix: &'static str,
}

impl ReleasePatterns {
    /// Build the patterns for the current platform.
    pub fn detect() -> Result<Self> {
        Self::for_platform(&Platform::detect())
    }

    pub fn for_platform(platform: &Platform) -> Result<Self> {
        let suffix = platform.release_suffix()?;
        Ok(Self {
            core: archive_pattern("dhall", suffix)?,
            json: archive_pattern("dhall-json", suffix)?,
            yaml: archive_pattern("dhall-yaml", suffix)?,
            suffix,
        })
    }

    /// The platform suffix the patterns were built for.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }
}

fn archive_pattern(tool: &str, suffix: &str) -> Result<Regex> {
    let pattern = format!(r"(?i){}-[0-9.]+.*-{}\.tar\.bz2", tool, suffix);
    Regex::new(&pattern).with_context(|| format!("Failed to compile archive pattern for {}", tool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_suffix_linux() {
        let platform = Platform { os: "linux".into() };
        assert_eq!(platform.release_suffix().unwrap(), "linux");
    }

    #[test]
    fn test_release_suffix_darwin_and_macos() {
        for os in ["darwin", "macos"] {
            let platform = Platform { os: os.into() };
            assert_eq!(platform.release_suffix().unwrap(), "macos");
        }
    }

    #[test]
    fn test_release_suffix_unsupported() {
        let platform = Platform { os: "win32".into() };
        let err = platform.release_suffix().unwrap_err();
        assert!(err.to_string().contains("win32"));
    }

    #[test]
    fn test_patterns_match_linux_archives() {
        let patterns = ReleasePatterns::for_platform(&Platform { os: "linux".into() }).unwrap();

        assert!(patterns.core.is_match("dhall-1.40.0-1-linux.tar.bz2"));
        assert!(patterns.json.is_match("dhall-json-1.7.0-1-linux.tar.bz2"));
        assert!(patterns.yaml.is_match("dhall-yaml-1.2.0-1-linux.tar.bz2"));
        assert_eq!(patterns.suffix(), "linux");
    }

    #[test]
    fn test_patterns_match_macos_archives() {
        let patterns = ReleasePatterns::for_platform(&Platform { os: "darwin".into() }).unwrap();

        assert!(patterns.core.is_match("dhall-1.40.0-1-macos.tar.bz2"));
        assert!(!patterns.core.is_match("dhall-1.40.0-1-linux.tar.bz2"));
        assert_eq!(patterns.suffix(), "macos");
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let patterns = ReleasePatterns::for_platform(&Platform { os: "linux".into() }).unwrap();
        assert!(patterns.core.is_match("Dhall-1.40.0-1-Linux.tar.bz2"));
    }

    #[test]
    fn test_core_pattern_rejects_plugin_archives() {
        // "dhall-" must be followed by the version digits, so the
        // plugin archives never satisfy the core pattern.
        let patterns = ReleasePatterns::for_platform(&Platform { os: "linux".into() }).unwrap();
        assert!(!patterns.core.is_match("dhall-json-1.7.0-1-linux.tar.bz2"));
        assert!(!patterns.core.is_match("dhall-yaml-1.2.0-1-linux.tar.bz2"));
    }

    #[test]
    fn test_patterns_reject_other_extensions() {
        let patterns = ReleasePatterns::for_platform(&Platform { os: "linux".into() }).unwrap();
        assert!(!patterns.core.is_match("dhall-1.40.0-1-linux.zip"));
        assert!(!patterns.core.is_match("dhall-1.40.0-1-windows.tar.bz2"));
    }

    #[test]
    fn test_detect_for_current_platform() {
        let platform = Platform::detect();
        assert!(!platform.os.is_empty());

        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, "linux");

        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, "macos");
    }

    #[test]
    fn test_unsupported_platform_fails_pattern_build() {
        let result = ReleasePatterns::for_platform(&Platform { os: "freebsd".into() });
        assert!(result.is_err());
    }
}
