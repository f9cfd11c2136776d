//! Health check system for verifying the tool environment
//!
//! Checks only observe the environment: tools are located on PATH, never
//! executed.

use crate::lookup::which_command;
use crate::platform::HostPlatform;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All checks passed
    Healthy,
    /// Some optional checks failed
    Degraded,
    /// Required checks failed
    Unhealthy,
}

impl HealthStatus {
    /// Returns true if status is healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    /// Returns true if status is healthy or degraded (still operational)
    #[must_use]
    pub fn is_operational(&self) -> bool {
        matches!(self, HealthStatus::Healthy | HealthStatus::Degraded)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: HealthStatus,
    /// Optional message with details
    pub message: Option<String>,
    /// Duration of the check in milliseconds
    pub duration_ms: u64,
    /// Additional details as key-value pairs
    pub details: HashMap<String, String>,
}

impl CheckResult {
    /// Create a healthy check result
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Healthy,
            message: None,
            duration_ms: 0,
            details: HashMap::new(),
        }
    }

    /// Create an unhealthy check result with a message
    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
            duration_ms: 0,
            details: HashMap::new(),
        }
    }

    /// Create a degraded check result with a message
    pub fn degraded(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Degraded,
            message: Some(message.into()),
            duration_ms: 0,
            details: HashMap::new(),
        }
    }

    /// Set the duration of the check
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis() as u64;
        self
    }

    /// Add a detail key-value pair
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Overall health report containing all check results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status based on all checks
    pub status: HealthStatus,
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Total duration of all checks in milliseconds
    pub total_duration_ms: u64,
    /// Timestamp when the report was generated
    pub timestamp: String,
    /// Version of the tool
    pub version: String,
}

impl HealthReport {
    /// Create a new health report from check results
    #[must_use]
    pub fn new(checks: Vec<CheckResult>, duration: Duration) -> Self {
        let status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Degraded
        };

        Self {
            status,
            checks,
            total_duration_ms: duration.as_millis() as u64,
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Returns true if overall status is healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }

    /// Get all checks that failed (not healthy)
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| !c.status.is_healthy())
            .collect()
    }
}

/// Health checker with configurable checks
pub struct HealthChecker {
    checks: Vec<Box<dyn HealthCheck>>,
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthChecker {
    /// Create a new health checker with no checks
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a health check
    pub fn add_check(mut self, check: impl HealthCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Add checks for the Xcode project workflow
    #[must_use]
    pub fn with_xcode_checks(self) -> Self {
        self.add_check(PlatformCheck)
            .add_check(ToolCheck::new("xcodebuild"))
            .add_check(ToolCheck::optional("xcodegen"))
            .add_check(EnvVarCheck::optional("DEVELOPER_DIR"))
    }

    /// Run all health checks
    #[must_use]
    pub fn run(&self) -> HealthReport {
        let start = Instant::now();
        let mut results = Vec::new();

        for check in &self.checks {
            let check_start = Instant::now();
            let mut result = check.check();
            result.duration_ms = check_start.elapsed().as_millis() as u64;
            results.push(result);
        }

        HealthReport::new(results, start.elapsed())
    }
}

/// Trait for implementing health checks
pub trait HealthCheck: Send + Sync {
    /// Perform the health check and return a result
    fn check(&self) -> CheckResult;
}

/// Check that the host platform can run Xcode
pub struct PlatformCheck;

impl HealthCheck for PlatformCheck {
    fn check(&self) -> CheckResult {
        let platform = HostPlatform::current();
        if platform.is_macos() {
            CheckResult::healthy("platform").with_detail("os", platform.to_string())
        } else {
            CheckResult::degraded(
                "platform",
                format!("{} cannot run Xcode; only manual instructions are available", platform),
            )
            .with_detail("os", platform.to_string())
        }
    }
}

/// Check if a command is installed (PATH lookup only)
pub struct ToolCheck {
    command: String,
    required: bool,
}

impl ToolCheck {
    /// Create a required tool check
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            required: true,
        }
    }

    /// Create an optional tool check (degraded if missing, not unhealthy)
    pub fn optional(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            required: false,
        }
    }
}

impl HealthCheck for ToolCheck {
    fn check(&self) -> CheckResult {
        match which_command(&self.command) {
            Some(path) => CheckResult::healthy(&self.command)
                .with_detail("path", path.display().to_string()),
            None => {
                if self.required {
                    CheckResult::unhealthy(
                        &self.command,
                        format!("{} is not installed", self.command),
                    )
                } else {
                    CheckResult::degraded(
                        &self.command,
                        format!("{} is not installed (optional)", self.command),
                    )
                }
            }
        }
    }
}

/// Check if an environment variable is set
pub struct EnvVarCheck {
    var_name: String,
    required: bool,
}

impl EnvVarCheck {
    /// Create a required environment variable check
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
            required: true,
        }
    }

    /// Create an optional environment variable check
    pub fn optional(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
            required: false,
        }
    }
}

impl HealthCheck for EnvVarCheck {
    fn check(&self) -> CheckResult {
        match std::env::var(&self.var_name) {
            Ok(value) => CheckResult::healthy(&self.var_name).with_detail("value", value),
            Err(_) => {
                if self.required {
                    CheckResult::unhealthy(
                        &self.var_name,
                        format!("{} is not set", self.var_name),
                    )
                } else {
                    CheckResult::degraded(
                        &self.var_name,
                        format!("{} is not set (optional)", self.var_name),
                    )
                }
            }
        }
    }
}

/// Check if a path exists
pub struct PathCheck {
    name: String,
    path: String,
}

impl PathCheck {
    /// Create a check that a path exists on disk
    pub fn exists(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl HealthCheck for PathCheck {
    fn check(&self) -> CheckResult {
        if Path::new(&self.path).exists() {
            CheckResult::healthy(&self.name).with_detail("path", &self.path)
        } else {
            CheckResult::unhealthy(&self.name, format!("{} does not exist", self.path))
                .with_detail("path", &self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_check_optional_missing() {
        let check = ToolCheck::optional("nonexistent_command_12345");
        let result = check.check();
        assert_eq!(result.status, HealthStatus::Degraded);
    }

    #[test]
    fn test_tool_check_required_missing() {
        let check = ToolCheck::new("nonexistent_command_12345");
        let result = check.check();
        assert_eq!(result.status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_path_check() {
        let dir = tempfile::tempdir().unwrap();
        let present = PathCheck::exists("project", dir.path().to_str().unwrap().to_string());
        assert!(present.check().status.is_healthy());

        let missing = PathCheck::exists("project", "/definitely/not/here/12345".to_string());
        assert_eq!(missing.check().status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_health_report() {
        let checks = vec![CheckResult::healthy("check1"), CheckResult::healthy("check2")];
        let report = HealthReport::new(checks, Duration::from_millis(100));
        assert!(report.is_healthy());
    }

    #[test]
    fn test_health_report_with_failure() {
        let checks = vec![
            CheckResult::healthy("check1"),
            CheckResult::unhealthy("check2", "Failed"),
        ];
        let report = HealthReport::new(checks, Duration::from_millis(100));
        assert!(!report.is_healthy());
        assert_eq!(report.status, HealthStatus::Unhealthy);
        assert_eq!(report.failed_checks().len(), 1);
    }

    #[test]
    fn test_degraded_is_operational() {
        let checks = vec![CheckResult::degraded("opt", "missing (optional)")];
        let report = HealthReport::new(checks, Duration::from_millis(1));
        assert_eq!(report.status, HealthStatus::Degraded);
        assert!(report.status.is_operational());
    }
}
