use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::{debug, info};

use super::context::SourceContext;
use super::super::{args::InspectCommand, exit_status::ExitStatus, report};
use crate::core::{TransformOptions, TransformReport, parsers::source::parse_source, transform};

/// Outcome of running the transform over one file.
#[derive(Debug)]
pub struct InspectedFile {
    pub path: String,
    pub outcome: Result<TransformReport, String>,
}

impl InspectedFile {
    pub fn report(&self) -> Option<&TransformReport> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }
}

/// Aggregated result of an `inspect` run, in file order.
#[derive(Debug, Default)]
pub struct InspectSummary {
    pub files: Vec<InspectedFile>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

impl InspectSummary {
    pub fn parse_error_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_err()).count()
    }

    pub fn component_count(&self) -> usize {
        self.reports().map(|r| r.components.len()).sum()
    }

    pub fn emitted_count(&self) -> usize {
        self.reports().map(TransformReport::emitted_count).sum()
    }

    pub fn property_count(&self) -> usize {
        self.reports().map(TransformReport::property_count).sum()
    }

    fn reports(&self) -> impl Iterator<Item = &TransformReport> {
        self.files.iter().filter_map(InspectedFile::report)
    }
}

pub fn inspect(cmd: InspectCommand) -> Result<ExitStatus> {
    let ctx = SourceContext::new(&cmd.paths, &cmd.common)?;
    debug!(files = ctx.files.len(), "inspecting source files");

    let summary = InspectSummary {
        files: inspect_files(&ctx.files, &ctx.config.transform),
        skipped_count: ctx.skipped_count,
    };

    if cmd.json {
        report::print_json(&summary)?;
    } else {
        report::print_inspection(&summary, ctx.verbose);
    }

    if summary.parse_error_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Run the transform over every file in parallel.
///
/// Each file gets its own SourceMap; results keep the input order.
pub fn inspect_files(files: &[String], options: &TransformOptions) -> Vec<InspectedFile> {
    files
        .par_iter()
        .map(|path| InspectedFile {
            path: path.clone(),
            outcome: inspect_file(path, options).map_err(|e| format!("{:#}", e)),
        })
        .collect()
}

fn inspect_file(path: &str, options: &TransformOptions) -> Result<TransformReport> {
    let code = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let source_map = Arc::new(SourceMap::default());
    let mut parsed = parse_source(code, path, source_map)?;
    let report = transform(&mut parsed.module, options);
    info!(
        file = path,
        components = report.components.len(),
        emitted = report.emitted_count(),
        "transformed module"
    );
    Ok(report)
}
