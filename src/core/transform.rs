use swc_ecma_ast::Module;

use crate::core::collect::collect;
use crate::core::options::TransformOptions;
use crate::core::report::TransformReport;
use crate::core::synthesize::synthesize;

/// Run both phases over one module, mutating it in place.
///
/// Collection only borrows the module, so the anchors it records are still
/// valid when synthesis splices statements in.
pub fn transform(module: &mut Module, options: &TransformOptions) -> TransformReport {
    let collection = collect(module, options);
    synthesize(module, collection, options)
}
