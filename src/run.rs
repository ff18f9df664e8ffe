//! Run-once resolution flow.
//!
//! Loads build-metadata defaults from an optional JSON file, resolves
//! them against the environment and CLI-supplied overrides, and renders
//! the finished record as JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use confweave::error::ConfigError;
use confweave::file;
use confweave::resolve::{Overrides, Resolver};
use confweave::schema::{ConfigSection, FieldSpec, ScalarSlot};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// External keys the build configuration binds to.
pub mod keys {
    /// Logging level for the process.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Application version.
    pub const VERSION: &str = "VERSION";
    /// Source control commit hash.
    pub const COMMIT: &str = "COMMIT";
    /// Source control branch name.
    pub const BRANCH: &str = "BRANCH";
    /// CI build number.
    pub const BUILD_NUMBER: &str = "BUILD_NUMBER";
}

/// Confweave: layered configuration resolution
///
/// Resolves the build configuration from defaults, an optional JSON
/// file, environment variables, and the overrides below, then prints
/// the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "confweave")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON defaults file
    #[arg(long, short, default_value = "./config.json")]
    pub config: PathBuf,

    /// Programmatic override for the commit hash
    #[arg(long)]
    pub commit: Option<String>,

    /// Build number applied after resolution
    #[arg(long = "build-number")]
    pub build_number: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Build metadata configuration for the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Logging level name.
    pub log_level: String,

    /// Version information section.
    pub build: BuildSection,
}

/// Version information about the application build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Application version.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Commit hash the build was produced from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub commit: String,

    /// Branch the build was produced from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub branch: String,

    /// CI build number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub build_number: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            build: BuildSection::default(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            commit: String::new(),
            branch: String::new(),
            build_number: String::new(),
        }
    }
}

impl ConfigSection for BuildConfig {
    fn fields(&mut self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::bound(
                "log_level",
                keys::LOG_LEVEL,
                ScalarSlot::Text(&mut self.log_level),
            ),
            FieldSpec::nested("build", &mut self.build),
        ]
    }
}

impl ConfigSection for BuildSection {
    fn fields(&mut self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::bound("version", keys::VERSION, ScalarSlot::Text(&mut self.version))
                .with_default("1.0.0"),
            FieldSpec::bound("commit", keys::COMMIT, ScalarSlot::Text(&mut self.commit)),
            FieldSpec::bound("branch", keys::BRANCH, ScalarSlot::Text(&mut self.branch)),
            FieldSpec::bound(
                "build_number",
                keys::BUILD_NUMBER,
                ScalarSlot::Text(&mut self.build_number),
            ),
        ]
    }
}

/// Loads, resolves, and renders the build configuration.
///
/// # Errors
///
/// Returns an error only if the final record cannot be serialized for
/// display; resolution itself degrades gracefully.
pub fn execute(cli: &Cli) -> Result<String, ConfigError> {
    let mut config = file::defaults_or(&cli.config, BuildConfig::default());

    let mut overrides = Overrides::new();
    if let Some(ref commit) = cli.commit {
        overrides = overrides.set(keys::COMMIT, commit);
    }

    let resolver = Resolver::new(overrides);
    let report = resolver.apply(&mut config);
    if !report.is_clean() {
        tracing::debug!("{} field(s) skipped during resolution", report.skipped().len());
    }

    // CLI build number wins over everything once resolution is done
    if let Some(ref build_number) = cli.build_number {
        config.build.build_number.clone_from(build_number);
    }

    file::to_json_string(&config)
}
