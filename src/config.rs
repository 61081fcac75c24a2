use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::TransformOptions;

pub const CONFIG_FILE_NAME: &str = ".ptmetarc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default)]
    pub transform: TransformOptions,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
            transform: TransformOptions::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is invalid,
    /// or if a transform name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        let names = [
            ("librarySource", &self.transform.library_source),
            ("defaultAlias", &self.transform.default_alias),
            ("metadataField", &self.transform.metadata_field),
            ("libraryBaseName", &self.transform.library_base_name),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                anyhow::bail!("'transform.{}' must not be empty", field);
            }
        }

        Ok(())
    }
}

/// The `.ptmetarc.json` written by `ptmeta init`: every setting spelled out with its default.
pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to serialize the default ptmeta settings")
}

/// Walk up from `start_dir` looking for `.ptmetarc.json`.
///
/// The directory holding `.git` is the last one searched, so a project never
/// picks up the scan and transform settings of an enclosing checkout.
pub fn locate_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .scan(false, |reached_repo_root, dir| {
            if *reached_repo_root {
                return None;
            }
            *reached_repo_root = dir.join(".git").exists();
            Some(dir.join(CONFIG_FILE_NAME))
        })
        .find(|candidate| candidate.is_file())
}

/// Scan and transform settings for one project run.
#[derive(Debug)]
pub struct ProjectConfig {
    pub config: Config,
    /// The `.ptmetarc.json` the settings came from; `None` when running on defaults.
    pub path: Option<PathBuf>,
}

impl ProjectConfig {
    pub fn is_default(&self) -> bool {
        self.path.is_none()
    }
}

/// Load the project's `.ptmetarc.json`, falling back to the built-in
/// defaults (scan everything under `./`, skip test files, emit
/// `_fakePropTypes` metadata into `__metadata`) when none is found.
pub fn load_config(start_dir: &Path) -> Result<ProjectConfig> {
    let Some(path) = locate_config(start_dir) else {
        debug!(start = %start_dir.display(), "no {} found, using defaults", CONFIG_FILE_NAME);
        return Ok(ProjectConfig {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read ptmeta settings from {}", path.display()))?;
    let config: Config = serde_json::from_str(&content).with_context(|| {
        format!(
            "{} is not a valid ptmeta config (expected `includes`, `ignores`, `sourceRoot`, \
             `ignoreTestFiles` and a `transform` object)",
            path.display()
        )
    })?;
    config
        .validate()
        .with_context(|| format!("Invalid scan or transform settings in {}", path.display()))?;

    debug!(
        config = %path.display(),
        library_source = %config.transform.library_source,
        metadata_field = %config.transform.metadata_field,
        "loaded project config"
    );
    Ok(ProjectConfig {
        config,
        path: Some(path),
    })
}
