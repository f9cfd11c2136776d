//! Add-files report for the Xcode project
//!
//! Reports which manifest files exist on disk and prints the manual (or
//! xcodegen-assisted) steps for adding them to the project. The project
//! file itself is never read or modified; regenerating it is the job of
//! external tools the user is pointed at.

use crate::manifest::FileManifest;
use metube_core::config::Config;
use metube_core::error::Result;
use metube_core::platform::HostPlatform;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Terminal state of a report run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Host cannot run Xcode; manual instructions were printed
    InstructionsOnly,
    /// Project bundle not found under the root; nothing was checked
    MissingProject,
    /// Per-file existence report was printed
    ReportEmitted,
}

/// Reports manifest state and add-to-project instructions
///
/// All inputs are fixed at construction; a run only reads the
/// filesystem and writes to the given writer.
#[derive(Debug)]
pub struct Reporter {
    manifest: FileManifest,
    project_name: String,
    xcodeproj: String,
    target: String,
    root: PathBuf,
    platform: HostPlatform,
    quiet: bool,
}

impl Reporter {
    /// Build a reporter from configuration, rooted at the given directory
    pub fn new(config: &Config, root: impl Into<PathBuf>) -> Result<Self> {
        let manifest = FileManifest::from_config(&config.schema.manifest)?;

        Ok(Self {
            manifest,
            project_name: config.schema.project.name.clone(),
            xcodeproj: config.schema.project.xcodeproj.clone(),
            target: config.schema.project.target.clone(),
            root: root.into(),
            platform: HostPlatform::current(),
            quiet: false,
        })
    }

    /// Override the detected host platform
    #[must_use]
    pub fn with_platform(mut self, platform: HostPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Suppress the banner and follow-up instructions
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The manifest this reporter describes
    pub fn manifest(&self) -> &FileManifest {
        &self.manifest
    }

    /// Emit the report and return the terminal state
    ///
    /// The platform branch is decided before any filesystem access, so a
    /// non-macOS run touches the disk not at all.
    pub fn run(&self, out: &mut impl Write) -> io::Result<ReportOutcome> {
        if !self.quiet {
            self.write_banner(out)?;
        }

        if !self.platform.is_macos() {
            tracing::debug!(platform = %self.platform, "host cannot run Xcode, emitting manual instructions");
            self.write_manual_instructions(out)?;
            return Ok(ReportOutcome::InstructionsOnly);
        }

        let project_path = self.root.join(&self.xcodeproj);
        if !project_path.exists() {
            tracing::debug!(path = %project_path.display(), "project bundle not found");
            writeln!(out, "{} {} not found in {}", "✗".red(), self.xcodeproj, self.root_label())?;
            writeln!(out, "Please run this tool from the repository root")?;
            return Ok(ReportOutcome::MissingProject);
        }

        tracing::debug!(files = self.manifest.len(), "emitting per-file report");
        writeln!(out, "The following files will be added to the Xcode project:")?;
        for entry in self.manifest.iter() {
            if self.root.join(entry).exists() {
                writeln!(out, "  {} {}", "✓".green(), entry)?;
            } else {
                writeln!(out, "  {} {}", "✗".red(), entry)?;
            }
        }
        writeln!(out)?;

        if !self.quiet {
            self.write_followup(out)?;
        }

        Ok(ReportOutcome::ReportEmitted)
    }

    /// Emit the manual add-to-Xcode steps unconditionally
    ///
    /// The platform-independent form of the instructions-only branch,
    /// for hosts where the user wants the steps without the report.
    pub fn instructions(&self, out: &mut impl Write) -> io::Result<()> {
        if !self.quiet {
            self.write_banner(out)?;
        }
        self.write_manual_instructions(out)
    }

    fn write_banner(&self, out: &mut impl Write) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(out, "{}", rule)?;
        writeln!(out, "{} Xcode Project File Adder", self.project_name)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;
        writeln!(out, "This tool needs to be run on a Mac with Xcode installed.")?;
        writeln!(out, "It reports the new Swift files to add to {}.", self.xcodeproj)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_manual_instructions(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}  This tool should be run on macOS with Xcode installed.", "⚠".yellow())?;
        writeln!(out)?;
        writeln!(out, "Manual steps required:")?;
        writeln!(out, "1. Open {} in Xcode", self.xcodeproj)?;
        writeln!(
            out,
            "2. Right-click on each folder and select 'Add Files to {}...'",
            self.project_name
        )?;
        writeln!(out, "3. Add these new files:")?;
        for entry in self.manifest.iter() {
            writeln!(out, "   - {}", entry)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_followup(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "To add these files to Xcode:")?;
        writeln!(out, "1. Open {} in Xcode", self.xcodeproj)?;
        writeln!(out, "2. In the Project Navigator, locate the affected groups:")?;
        for group in self.affected_groups() {
            writeln!(out, "   - {}", group)?;
        }
        writeln!(
            out,
            "3. Drag and drop or use 'Add Files to {}...'",
            self.project_name
        )?;
        writeln!(out, "4. Ensure files are added to the {} target", self.target)?;
        writeln!(out)?;
        writeln!(out, "Or use a tool like xcodegen to regenerate the project file")?;
        Ok(())
    }

    /// Top-level groups the manifest touches, in first-appearance order
    fn affected_groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();

        for entry in self.manifest.iter() {
            let path = Path::new(entry);
            let file_name = path.file_name().and_then(|n| n.to_str());
            let mut components = path.components().filter_map(|c| c.as_os_str().to_str());

            let group = match components.next() {
                // Paths usually start with the source root folder; the
                // group is the folder below it.
                Some(first) if first == self.project_name => components.next(),
                first => first,
            };

            let Some(group) = group else { continue };
            // Top-level files belong to no group.
            if Some(group) == file_name {
                continue;
            }
            if !groups.iter().any(|g| g == group) {
                groups.push(group.to_string());
            }
        }

        groups
    }

    fn root_label(&self) -> String {
        if self.root == Path::new(".") {
            "the current directory".to_string()
        } else {
            self.root.display().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn reporter_at(root: &Path) -> Reporter {
        Reporter::new(&Config::defaults(), root).unwrap()
    }

    fn run_to_string(reporter: &Reporter) -> (ReportOutcome, String) {
        let mut out = Vec::new();
        let outcome = reporter.run(&mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn default_files() -> Vec<String> {
        Config::defaults().schema.manifest.files
    }

    #[test]
    fn test_instructions_branch_lists_every_file_in_order() {
        // Root intentionally does not exist: the platform branch must
        // return before any filesystem access.
        let reporter = reporter_at(Path::new("/nonexistent/root/12345"))
            .with_platform(HostPlatform::Other("linux".to_string()));

        let (outcome, output) = run_to_string(&reporter);
        assert_eq!(outcome, ReportOutcome::InstructionsOnly);

        let mut last_pos = 0;
        for file in default_files() {
            let pos = output
                .find(&file)
                .unwrap_or_else(|| panic!("missing {} in output", file));
            assert!(pos > last_pos, "{} listed out of order", file);
            assert!(output.contains(&format!("   - {}", file)));
            last_pos = pos;
        }
    }

    #[test]
    fn test_missing_project_branch() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = reporter_at(dir.path()).with_platform(HostPlatform::MacOs);

        let (outcome, output) = run_to_string(&reporter);
        assert_eq!(outcome, ReportOutcome::MissingProject);
        assert!(output.contains("MeTube.xcodeproj not found"));
        assert!(!output.contains("will be added"));
        assert!(!output.contains(".swift"));
    }

    #[test]
    fn test_report_branch_marks_existing_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("MeTube.xcodeproj")).unwrap();

        let files = default_files();
        let seeded = &files[0];
        fs::create_dir_all(dir.path().join(seeded).parent().unwrap()).unwrap();
        fs::write(dir.path().join(seeded), "import Foundation\n").unwrap();

        let reporter = reporter_at(dir.path()).with_platform(HostPlatform::MacOs);
        let (outcome, output) = run_to_string(&reporter);
        assert_eq!(outcome, ReportOutcome::ReportEmitted);

        // Exactly one report line per manifest entry.
        let report_lines: Vec<&str> = output
            .lines()
            .filter(|l| l.contains(".swift") && l.starts_with("  "))
            .collect();
        assert_eq!(report_lines.len(), files.len());

        let seeded_line = report_lines.iter().find(|l| l.contains(seeded.as_str())).unwrap();
        assert!(seeded_line.contains('✓'));
        for line in report_lines.iter().filter(|l| !l.contains(seeded.as_str())) {
            assert!(line.contains('✗'));
        }
    }

    #[test]
    fn test_report_branch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("MeTube.xcodeproj")).unwrap();

        let reporter = reporter_at(dir.path()).with_platform(HostPlatform::MacOs);
        let (outcome, _) = run_to_string(&reporter);
        assert_eq!(outcome, ReportOutcome::ReportEmitted);

        for file in default_files() {
            assert!(!dir.path().join(&file).exists(), "{} was created", file);
        }
    }

    #[test]
    fn test_quiet_suppresses_banner_and_followup() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("MeTube.xcodeproj")).unwrap();

        let reporter = reporter_at(dir.path())
            .with_platform(HostPlatform::MacOs)
            .with_quiet(true);
        let (_, output) = run_to_string(&reporter);

        assert!(!output.contains("File Adder"));
        assert!(!output.contains("xcodegen"));
        assert!(output.contains("will be added"));
    }

    #[test]
    fn test_affected_groups_first_appearance_order() {
        let reporter = reporter_at(Path::new("."));
        assert_eq!(
            reporter.affected_groups(),
            vec!["Models".to_string(), "Repositories".to_string(), "Services".to_string()]
        );
    }

    #[test]
    fn test_banner_names_the_project() {
        let reporter = reporter_at(Path::new("/nonexistent"))
            .with_platform(HostPlatform::Other("linux".to_string()));
        let (_, output) = run_to_string(&reporter);
        assert!(output.contains("MeTube Xcode Project File Adder"));
    }
}
