//! Printing transformed modules back to source text.

use std::sync::Arc;

use anyhow::{Context, Result};
use swc_common::{SourceMap, comments::Comments};
use swc_ecma_ast::Module;
use swc_ecma_codegen::{Config, Emitter, text_writer::JsWriter};

use crate::core::options::TransformOptions;
use crate::core::parsers::source::parse_source;
use crate::core::report::TransformReport;
use crate::core::transform::transform;

/// A source file after the transform, ready to be written out.
#[derive(Debug)]
pub struct EmittedModule {
    pub code: String,
    pub report: TransformReport,
}

/// Print a module with swc's code generator.
///
/// Synthesized statements carry dummy spans, so only comments that were
/// attached to original code are reproduced.
pub fn emit_module(
    module: &Module,
    source_map: &Arc<SourceMap>,
    comments: Option<&dyn Comments>,
) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut emitter = Emitter {
            cfg: Config::default().with_minify(false),
            cm: source_map.clone(),
            comments,
            wr: JsWriter::new(source_map.clone(), "\n", &mut buf, None),
        };
        emitter
            .emit_module(module)
            .context("Failed to print transformed module")?;
    }
    String::from_utf8(buf).context("Generated code is not valid UTF-8")
}

/// Parse, transform and print one file's source.
pub fn transform_source(
    code: String,
    file_path: &str,
    options: &TransformOptions,
) -> Result<EmittedModule> {
    let source_map = Arc::new(SourceMap::default());
    let mut parsed = parse_source(code, file_path, source_map)?;
    let report = transform(&mut parsed.module, options);
    let code = emit_module(&parsed.module, &parsed.source_map, Some(&parsed.comments))?;
    Ok(EmittedModule { code, report })
}
