//! Phase 1: Collection - components, their property types, and the library alias.
//!
//! This module walks a module's top-level statement list once, in document order:
//! - Resolving the local alias of the validation library's default import
//! - Registering top-level class, function, and function-valued declarations
//! - Collecting `propTypes` from static class fields and `Foo.propTypes = {...}`
//!
//! Only top-level statements are considered; anything nested inside another
//! construct is ignored. The tree is borrowed immutably and left untouched.
//!
//! ## Module Structure
//!
//! - `alias`: Validation library alias resolution
//! - `props`: Static `propTypes` class field collection
//! - `registry`: Component registry and per-component property storage
//! - `shapes`: Classification of top-level items

pub mod alias;
pub mod props;
pub mod registry;
pub mod shapes;

use swc_ecma_ast::Module;
use tracing::{debug, trace};

pub use alias::AliasResolver;
pub use props::StaticPropTypesCollector;
pub use registry::{Anchor, ComponentEntry, Registry};
pub use shapes::{ComponentDecl, ComponentKind, TopLevelItem, classify};

use crate::core::options::TransformOptions;

/// Everything Phase 2 needs from the walk.
#[derive(Debug)]
pub struct Collection {
    /// Local name believed to refer to the validation library.
    pub alias: String,
    pub registry: Registry,
}

/// Walk the top-level statements of `module` and collect components.
pub fn collect(module: &Module, options: &TransformOptions) -> Collection {
    let mut resolver = AliasResolver::new(&options.library_source, &options.default_alias);
    let mut registry = Registry::new();

    for (index, item) in module.body.iter().enumerate() {
        match classify(item) {
            TopLevelItem::Import(import) => resolver.observe(import),
            TopLevelItem::Component(decl) => {
                let name = decl.name();
                debug!(component = name, kind = ?decl.kind(), "registered component");
                registry.register(name, decl.kind(), Anchor(index));

                if let ComponentDecl::Class(class) = decl
                    && let Some(entry) = registry.get_mut(name)
                {
                    StaticPropTypesCollector::collect(class, entry);
                }
            }
            TopLevelItem::PropTypesAssignment { component, props } => {
                match registry.get_mut(component.sym.as_str()) {
                    Some(entry) => {
                        let taken = entry.collect_properties(props);
                        debug!(component = %component.sym, taken, "propTypes assignment");
                    }
                    None => {
                        trace!(component = %component.sym, "propTypes for unknown component");
                    }
                }
            }
            TopLevelItem::Other => {}
        }
    }

    Collection {
        alias: resolver.into_alias(),
        registry,
    }
}
