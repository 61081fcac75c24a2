use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result, anyhow, bail};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::scanner::scan_files,
};

/// Settings and source files shared by the commands that run the transform.
pub struct SourceContext {
    pub config: Config,
    pub files: Vec<String>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
    pub verbose: bool,
}

impl SourceContext {
    /// Load the project config and expand `paths` into the files to transform.
    pub fn new(paths: &[PathBuf], args: &CommonArgs) -> Result<Self> {
        // Priority: CLI --source-root arg > current directory
        let root_dir = args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let project = load_config(&root_dir)?;
        if args.verbose && project.is_default() {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }
        let config = project.config;

        let (files, skipped_count) = resolve_files(paths, &root_dir, &config)?;
        debug!(files = files.len(), skipped = skipped_count, "resolved source files");

        Ok(Self {
            config,
            files,
            skipped_count,
            verbose: args.verbose,
        })
    }
}

/// Expand the command's path arguments into a sorted file list.
///
/// Files are taken as given; directories are scanned with the configured
/// ignores. With no arguments the configured source root is scanned.
fn resolve_files(
    paths: &[PathBuf],
    root_dir: &Path,
    config: &Config,
) -> Result<(Vec<String>, usize)> {
    if paths.is_empty() {
        let scan_root = scan_root(root_dir, &config.source_root);
        let scan_root = scan_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", scan_root))?;
        let result = scan_files(
            scan_root,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );
        return Ok((result.files, result.skipped_count));
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;
    for path in paths {
        if path.is_dir() {
            let dir = path
                .to_str()
                .with_context(|| anyhow!("Invalid path: {:?}", path))?;
            let result = scan_files(dir, &[], &config.ignores, config.ignore_test_files);
            files.extend(result.files);
            skipped_count += result.skipped_count;
        } else if path.is_file() {
            files.push(path.to_string_lossy().into_owned());
        } else {
            bail!("Path does not exist: {}", path.display());
        }
    }
    files.sort();
    files.dedup();
    Ok((files, skipped_count))
}

/// Resolve the configured source root against the directory the config was found from.
fn scan_root(root_dir: &Path, source_root: &str) -> PathBuf {
    let p = Path::new(source_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir.components().all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(".").unwrap_or(p);
        root_dir.join(rel)
    }
}
