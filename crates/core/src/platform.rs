//! Host platform detection
//!
//! Xcode tooling only exists on macOS, so every command that touches a
//! project bundle branches on the host platform first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operating system the process is running on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    /// macOS, the only platform with Xcode
    MacOs,
    /// Any other operating system, by its `std::env::consts::OS` name
    Other(String),
}

impl HostPlatform {
    /// Detect the platform of the current process
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Build from an OS identifier as reported by `std::env::consts::OS`
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" => HostPlatform::MacOs,
            other => HostPlatform::Other(other.to_string()),
        }
    }

    /// Whether this platform can host Xcode
    pub fn is_macos(&self) -> bool {
        matches!(self, HostPlatform::MacOs)
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::MacOs => write!(f, "macos"),
            HostPlatform::Other(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_name() {
        let platform = HostPlatform::from_os_name("macos");
        assert!(platform.is_macos());
        assert_eq!(platform.to_string(), "macos");
    }

    #[test]
    fn test_other_names() {
        for os in ["linux", "windows", "freebsd"] {
            let platform = HostPlatform::from_os_name(os);
            assert!(!platform.is_macos());
            assert_eq!(platform.to_string(), os);
        }
    }

    #[test]
    fn test_current_does_not_panic() {
        let _ = HostPlatform::current();
    }
}
