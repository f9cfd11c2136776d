//! Xcode environment probes
//!
//! Lookup-only: the tools are located so the report can tell the user
//! what is available, but they are never executed from here.

use metube_core::lookup::{command_exists, which_command};
use std::path::PathBuf;

/// Check if xcodebuild is installed
pub fn has_xcodebuild() -> bool {
    command_exists("xcodebuild")
}

/// Check if xcodegen is installed
pub fn has_xcodegen() -> bool {
    command_exists("xcodegen")
}

/// Resolved path of the xcodegen binary, if installed
pub fn xcodegen_path() -> Option<PathBuf> {
    which_command("xcodegen")
}

/// Value of DEVELOPER_DIR, if set
pub fn developer_dir() -> Option<PathBuf> {
    std::env::var_os("DEVELOPER_DIR").map(PathBuf::from)
}
