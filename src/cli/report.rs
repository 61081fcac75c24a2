//! Report formatting and printing utilities.
//!
//! Kept apart from the transform so the engine can be used as a library
//! without pulling in terminal output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::commands::InspectSummary;
use crate::core::{TransformReport, collect::ComponentKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Marks a component that was registered but declared no property types.
const SKIPPED_MARK: &str = "-";

/// Print the human-readable inspection report to stdout.
pub fn print_inspection(summary: &InspectSummary, verbose: bool) {
    print_inspection_to(summary, verbose, &mut io::stdout().lock());
}

/// Print the human-readable inspection report to a custom writer.
///
/// Files without components are only listed in verbose mode; parse failures
/// are always listed.
pub fn print_inspection_to<W: Write>(summary: &InspectSummary, verbose: bool, writer: &mut W) {
    for file in &summary.files {
        match &file.outcome {
            Ok(report) if verbose || !report.components.is_empty() => {
                print_file(&file.path, report, writer)
            }
            Ok(_) => {}
            Err(error) => {
                let _ = writeln!(
                    writer,
                    "{} {}: {}",
                    FAILURE_MARK.red(),
                    file.path.bold(),
                    error
                );
            }
        }
    }

    if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            summary.skipped_count
        );
    }

    print_summary(summary, writer);
}

/// JSON document printed by `inspect --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub files: Vec<JsonFile<'a>>,
    pub summary: JsonSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFile<'a> {
    pub path: &'a str,
    #[serde(flatten)]
    pub report: Option<&'a TransformReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSummary {
    pub files: usize,
    pub components: usize,
    pub emitted: usize,
    pub properties: usize,
    pub parse_errors: usize,
}

impl<'a> JsonReport<'a> {
    pub fn new(summary: &'a InspectSummary) -> Self {
        Self {
            files: summary
                .files
                .iter()
                .map(|file| JsonFile {
                    path: &file.path,
                    report: file.report(),
                    error: file.error(),
                })
                .collect(),
            summary: JsonSummary {
                files: summary.files.len(),
                components: summary.component_count(),
                emitted: summary.emitted_count(),
                properties: summary.property_count(),
                parse_errors: summary.parse_error_count(),
            },
        }
    }
}

/// Print the inspection report as one pretty-printed JSON document.
pub fn print_json(summary: &InspectSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport::new(summary))?;
    println!("{}", json);
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_file<W: Write>(path: &str, report: &TransformReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        path.bold(),
        format!("(library {}, alias {})", report.library, report.alias).dimmed()
    );

    for component in &report.components {
        let kind = format!("({})", kind_label(component.kind)).dimmed();
        if component.emitted {
            let _ = writeln!(
                writer,
                "  {} {} {}: {}",
                SUCCESS_MARK.green(),
                component.name.cyan(),
                kind,
                component.properties.join(", ")
            );
        } else {
            let _ = writeln!(
                writer,
                "  {} {} {}: {}",
                SKIPPED_MARK.dimmed(),
                component.name.cyan(),
                kind,
                "no propTypes".dimmed()
            );
        }
    }
}

fn print_summary<W: Write>(summary: &InspectSummary, writer: &mut W) {
    let files = summary.files.len();
    let components = summary.component_count();
    let properties = summary.property_count();
    let parse_errors = summary.parse_error_count();

    let mut message = format!(
        "Inspected {} {}: {} {}, {} with metadata, {} {}",
        files,
        plural(files, "file", "files"),
        components,
        plural(components, "component", "components"),
        summary.emitted_count(),
        properties,
        plural(properties, "property", "properties"),
    );

    if parse_errors == 0 {
        let _ = writeln!(writer, "\n{} {}", SUCCESS_MARK.green(), message.green());
    } else {
        message.push_str(&format!(
            ", {} parse {}",
            parse_errors,
            plural(parse_errors, "error", "errors")
        ));
        let _ = writeln!(writer, "\n{} {}", FAILURE_MARK.red(), message.red());
    }
}

fn kind_label(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Class => "class",
        ComponentKind::Function => "function",
        ComponentKind::FunctionValue => "function value",
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
