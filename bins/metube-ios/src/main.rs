//! MeTube iOS CLI
//!
//! Xcode project helpers for MeTube iOS development.

use anyhow::Result;
use clap::{Parser, Subcommand};
use metube_cli::output::Status;
use metube_core::config::Config;
use metube_core::error::exit_codes;
use metube_core::health::{HealthChecker, PathCheck};
use metube_core::platform::HostPlatform;
use metube_ios::manifest::FileManifest;
use metube_ios::reporter::Reporter;
use metube_ios::xcode;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "metube-ios")]
#[command(about = "Xcode project helpers for MeTube iOS development")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root directory
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print the per-file report lines
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report manifest file state and how to add the files (default)
    Report,

    /// Print the manual add-to-Xcode steps, regardless of platform
    Instructions,

    /// List the manifest entries in declared order
    Manifest,

    /// Diagnose the Xcode environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose > 0 {
        tracing_subscriber::fmt()
            .with_env_filter("metube_core=debug,metube_ios=debug")
            .init();
    }

    let config = Config::load(cli.config.as_deref().and_then(|p| p.to_str()))?;

    let exit_code = match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => run_report(&config, &cli.root, cli.quiet),
        Commands::Instructions => run_instructions(&config, &cli.root, cli.quiet),
        Commands::Manifest => run_manifest(&config),
        Commands::Doctor { json } => run_doctor(&config, &cli.root, json),
    };

    std::process::exit(exit_code);
}

fn run_report(config: &Config, root: &Path, quiet: bool) -> i32 {
    let reporter = match Reporter::new(config, root) {
        Ok(reporter) => reporter.with_quiet(quiet),
        Err(e) => {
            Status::error(&format!("Invalid manifest: {}", e));
            return exit_codes::VALIDATION_ERROR;
        }
    };

    let stdout = std::io::stdout();
    match reporter.run(&mut stdout.lock()) {
        Ok(_) => exit_codes::SUCCESS,
        Err(e) => {
            Status::error(&format!("Report failed: {}", e));
            exit_codes::FAILURE
        }
    }
}

fn run_instructions(config: &Config, root: &Path, quiet: bool) -> i32 {
    let reporter = match Reporter::new(config, root) {
        Ok(reporter) => reporter.with_quiet(quiet),
        Err(e) => {
            Status::error(&format!("Invalid manifest: {}", e));
            return exit_codes::VALIDATION_ERROR;
        }
    };

    let stdout = std::io::stdout();
    match reporter.instructions(&mut stdout.lock()) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            Status::error(&format!("Failed to print instructions: {}", e));
            exit_codes::FAILURE
        }
    }
}

fn run_manifest(config: &Config) -> i32 {
    match FileManifest::from_config(&config.schema.manifest) {
        Ok(manifest) => {
            for entry in manifest.iter() {
                println!("{}", entry);
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("Invalid manifest: {}", e));
            exit_codes::VALIDATION_ERROR
        }
    }
}

fn run_doctor(config: &Config, root: &Path, json: bool) -> i32 {
    let xcodeproj = &config.schema.project.xcodeproj;
    let project_path = root.join(xcodeproj);

    if json {
        let report = HealthChecker::new()
            .with_xcode_checks()
            .add_check(PathCheck::exists("xcodeproj", project_path.display().to_string()))
            .run();

        return match serde_json::to_string_pretty(&report) {
            Ok(encoded) => {
                println!("{}", encoded);
                exit_codes::SUCCESS
            }
            Err(e) => {
                Status::error(&format!("Failed to encode report: {}", e));
                exit_codes::FAILURE
            }
        };
    }

    Status::header("Environment Check");

    let platform = HostPlatform::current();
    if platform.is_macos() {
        Status::success("Platform: macos");
    } else {
        Status::warning(&format!(
            "Platform: {} (Xcode unavailable, manual instructions only)",
            platform
        ));
    }

    if xcode::has_xcodebuild() {
        Status::success("xcodebuild: installed");
    } else {
        Status::error("xcodebuild: not found");
    }

    match xcode::xcodegen_path() {
        Some(path) => Status::success(&format!("xcodegen: {}", path.display())),
        None => Status::warning("xcodegen: not found (optional; brew install xcodegen)"),
    }

    match xcode::developer_dir() {
        Some(dir) => Status::success(&format!("DEVELOPER_DIR: {}", dir.display())),
        None => Status::info("DEVELOPER_DIR: not set (using the default toolchain)"),
    }

    if project_path.exists() {
        Status::success(&format!("{}: present", xcodeproj));
    } else {
        Status::warning(&format!("{}: not found under {}", xcodeproj, root.display()));
    }

    exit_codes::SUCCESS
}
