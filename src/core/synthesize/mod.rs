//! Phase 2: Synthesis - replacement library and metadata statements.
//!
//! Runs exactly once per module, after collection, and consumes its result:
//! 1. Generate an identifier for the replacement library that no name in the module uses
//! 2. Build the no-op replacement library and insert it as the first statement
//!    after any directive prologue (`'use client'`, `'use strict'`)
//! 3. For each component with collected properties, build
//!    `Name.__metadata = { props: { p: { type: T } } }` and insert it right after
//!    the component's declaration
//! 4. Inside each inserted metadata statement only, retarget alias references and
//!    `.isRequired` chains to the replacement library
//!
//! ## Module Structure
//!
//! - `library`: Replacement library construction
//! - `metadata`: Metadata statement construction
//! - `rewrite`: Reference rewriting scoped to one statement
//! - `uid`: Collision-free identifier generation

pub mod library;
pub mod metadata;
pub mod rewrite;
pub mod uid;

use swc_ecma_ast::{Expr, ExprStmt, Lit, Module, ModuleItem, Stmt};
use tracing::{debug, warn};

pub use library::build_library;
pub use metadata::build_metadata;
pub use rewrite::rewrite_references;
pub use uid::generate_uid;

use crate::core::collect::{Anchor, Collection};
use crate::core::options::TransformOptions;
use crate::core::report::{ComponentReport, TransformReport};

/// Insert the replacement library and every component's metadata into `module`.
///
/// `collection` must come from `collect` over this same, unmodified module: its
/// anchors index `module.body` as it was during collection.
pub fn synthesize(
    module: &mut Module,
    collection: Collection,
    options: &TransformOptions,
) -> TransformReport {
    let Collection { alias, registry } = collection;
    let library = generate_uid(module, &options.library_base_name);
    debug!(%library, %alias, components = registry.len(), "synthesizing metadata");

    let mut components = Vec::with_capacity(registry.len());
    let mut insertions = Vec::new();

    for entry in registry.into_entries() {
        let report = ComponentReport {
            name: entry.name.clone(),
            kind: entry.kind,
            properties: entry.properties.keys().cloned().collect(),
            emitted: !entry.properties.is_empty(),
        };

        if let Some((anchor, stmt)) = build_metadata(entry, &options.metadata_field) {
            debug!(component = %report.name, anchor = anchor.0, "emitting metadata");
            insertions.push((anchor, rewrite_references(stmt, &alias, &library)));
        }
        components.push(report);
    }

    splice(module, build_library(&library), insertions);

    TransformReport {
        library,
        alias,
        components,
    }
}

/// Rebuild the body with `library` right after the directive prologue and each
/// statement after its anchor.
///
/// Statements sharing an anchor keep the order they were given in.
fn splice(module: &mut Module, library: Stmt, mut insertions: Vec<(Anchor, Stmt)>) {
    insertions.sort_by_key(|(anchor, _)| *anchor);

    let body = std::mem::take(&mut module.body);
    let prologue = body.iter().take_while(|item| is_directive(item)).count();
    let mut spliced = Vec::with_capacity(body.len() + insertions.len() + 1);
    let mut library = Some(library);
    if prologue == 0 {
        spliced.extend(library.take().map(ModuleItem::Stmt));
    }

    let mut pending = insertions.into_iter().peekable();
    for (index, item) in body.into_iter().enumerate() {
        spliced.push(item);
        if index + 1 == prologue {
            spliced.extend(library.take().map(ModuleItem::Stmt));
        }
        while let Some((_, stmt)) = pending.next_if(|(anchor, _)| anchor.0 == index) {
            spliced.push(ModuleItem::Stmt(stmt));
        }
    }

    for (anchor, _) in pending {
        warn!(anchor = anchor.0, "dropping metadata anchored past the end of the module");
    }

    module.body = spliced;
}

/// `'use client';`, `'use strict';` and other string-literal expression statements.
fn is_directive(item: &ModuleItem) -> bool {
    matches!(
        item,
        ModuleItem::Stmt(Stmt::Expr(ExprStmt { expr, .. })) if matches!(&**expr, Expr::Lit(Lit::Str(_)))
    )
}
