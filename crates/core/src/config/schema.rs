//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// Project identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    #[serde(default = "default_project_name")]
    pub name: String,

    /// Xcode project bundle directory
    #[serde(default = "default_xcodeproj")]
    pub xcodeproj: String,

    /// Build target the files belong to
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            xcodeproj: default_xcodeproj(),
            target: default_target(),
        }
    }
}

fn default_project_name() -> String {
    "MeTube".to_string()
}

fn default_xcodeproj() -> String {
    "MeTube.xcodeproj".to_string()
}

fn default_target() -> String {
    "MeTube".to_string()
}

/// File manifest configuration
///
/// The declared order is significant and is preserved as-is in every
/// report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Relative paths of the files awaiting addition to the project
    #[serde(default = "default_manifest_files")]
    pub files: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            files: default_manifest_files(),
        }
    }
}

/// The files created during the offline-first refactoring
fn default_manifest_files() -> Vec<String> {
    vec![
        "MeTube/Models/Persistence/VideoEntity.swift",
        "MeTube/Models/Persistence/ChannelEntity.swift",
        "MeTube/Models/Persistence/StatusEntity.swift",
        "MeTube/Repositories/VideoRepository.swift",
        "MeTube/Repositories/StatusRepository.swift",
        "MeTube/Repositories/ChannelRepository.swift",
        "MeTube/Services/Sync/HubSyncManager.swift",
        "MeTube/Services/Sync/StatusSyncManager.swift",
        "MeTube/Models/ModelConverters.swift",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_project() {
        let project = ProjectConfig::default();
        assert_eq!(project.name, "MeTube");
        assert_eq!(project.xcodeproj, "MeTube.xcodeproj");
        assert_eq!(project.target, "MeTube");
    }

    #[test]
    fn test_default_manifest_order() {
        let manifest = ManifestConfig::default();
        assert_eq!(manifest.files.len(), 9);
        assert_eq!(manifest.files[0], "MeTube/Models/Persistence/VideoEntity.swift");
        assert_eq!(manifest.files[8], "MeTube/Models/ModelConverters.swift");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [project]
            name = "MeTubeBeta"
            "#,
        )
        .unwrap();
        assert_eq!(schema.project.name, "MeTubeBeta");
        assert_eq!(schema.project.xcodeproj, "MeTube.xcodeproj");
        assert_eq!(schema.manifest.files.len(), 9);
    }
}
