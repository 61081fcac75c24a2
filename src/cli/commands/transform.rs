use std::{
    fs,
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use tracing::info;

use super::context::SourceContext;
use super::super::{
    args::TransformCommand,
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK},
};
use crate::core::{EmittedModule, TransformOptions, transform_source};

/// Where transformed code goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    InPlace,
    Directory(PathBuf),
}

impl From<&TransformCommand> for Output {
    fn from(cmd: &TransformCommand) -> Self {
        match (&cmd.out_dir, cmd.write) {
            (Some(dir), _) => Output::Directory(dir.clone()),
            (None, true) => Output::InPlace,
            (None, false) => Output::Stdout,
        }
    }
}

pub fn transform(cmd: TransformCommand) -> Result<ExitStatus> {
    let ctx = SourceContext::new(&cmd.paths, &cmd.common)?;
    let output = Output::from(&cmd);

    let results = transform_files(&ctx.files, &ctx.config.transform);

    let mut failed = 0;
    let mut emitted = 0;
    let show_headers = results.len() > 1;
    let mut stdout = io::stdout().lock();
    for (path, result) in &results {
        let module = match result {
            Ok(module) => module,
            Err(error) => {
                failed += 1;
                eprintln!("{} {}: {}", FAILURE_MARK.red(), path.bold(), error);
                continue;
            }
        };
        emitted += module.report.emitted_count();

        match &output {
            Output::Stdout => {
                if show_headers {
                    writeln!(stdout, "// {}", path)?;
                }
                write!(stdout, "{}", module.code)?;
            }
            Output::InPlace => {
                fs::write(path, &module.code)
                    .with_context(|| format!("Failed to write file: {}", path))?;
                print_written(&mut stdout, path, module)?;
            }
            Output::Directory(dir) => {
                let target = out_path(dir, path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
                fs::write(&target, &module.code)
                    .with_context(|| format!("Failed to write file: {}", target.display()))?;
                print_written(&mut stdout, &target.to_string_lossy(), module)?;
            }
        }
    }

    if ctx.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            ctx.skipped_count
        );
    }
    info!(
        files = results.len(),
        emitted,
        failed,
        "transform finished"
    );

    if output != Output::Stdout {
        writeln!(
            stdout,
            "\nTransformed {} of {} files, {} with metadata",
            results.len() - failed,
            results.len(),
            emitted
        )?;
    }

    if failed > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Transform every file in parallel, keeping the input order.
pub fn transform_files(
    files: &[String],
    options: &TransformOptions,
) -> Vec<(String, Result<EmittedModule, String>)> {
    files
        .par_iter()
        .map(|path| {
            let result = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))
                .and_then(|code| transform_source(code, path, options))
                .map_err(|e| format!("{:#}", e));
            (path.clone(), result)
        })
        .collect()
}

/// Place `file` under `out_dir`, dropping any root, `.` or `..` components.
fn out_path(out_dir: &Path, file: &str) -> PathBuf {
    let relative: PathBuf = Path::new(file)
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect();
    out_dir.join(relative)
}

fn print_written<W: Write>(writer: &mut W, path: &str, module: &EmittedModule) -> Result<()> {
    let emitted = module.report.emitted_count();
    writeln!(
        writer,
        "{} {} {}",
        SUCCESS_MARK.green(),
        path,
        format!(
            "({} of {} components with metadata)",
            emitted,
            module.report.components.len()
        )
        .dimmed()
    )?;
    Ok(())
}
