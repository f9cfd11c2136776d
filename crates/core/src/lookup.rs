//! PATH lookup for external tools
//!
//! The tools this workspace reports on (xcodebuild, xcodegen) are never
//! spawned, only located, so the whole surface is a safe `which`-based
//! lookup.

use std::path::PathBuf;

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Get the resolved path of a command, if installed
pub fn which_command(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists_echo() {
        assert!(command_exists("echo"));
    }

    #[test]
    fn test_command_exists_nonexistent() {
        assert!(!command_exists("nonexistent_command_12345"));
    }

    #[test]
    fn test_which_command_resolves() {
        let path = which_command("echo");
        assert!(path.is_some_and(|p| p.is_absolute()));
    }
}
