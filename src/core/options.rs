//! Fixed names the transform matches against and emits.

use serde::{Deserialize, Serialize};

/// Module specifier of the property-type validation library.
pub const DEFAULT_LIBRARY_SOURCE: &str = "prop-types";

/// Local name assumed for the library's default export when no import binds one.
pub const DEFAULT_ALIAS: &str = "PropTypes";

/// Field assigned on each component to hold the synthesized metadata.
pub const DEFAULT_METADATA_FIELD: &str = "__metadata";

/// Base name the replacement library identifier is generated from.
pub const DEFAULT_LIBRARY_BASE_NAME: &str = "fakePropTypes";

/// Static field / assigned member that declares a component's property types.
pub const PROP_TYPES_FIELD: &str = "propTypes";

/// Validator member rewritten into an explicit call against the replacement library.
pub const IS_REQUIRED: &str = "isRequired";

/// Names used by a single transform run.
///
/// Every field has a fixed default; nothing is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    #[serde(default = "default_library_source")]
    pub library_source: String,
    #[serde(default = "default_alias")]
    pub default_alias: String,
    #[serde(default = "default_metadata_field")]
    pub metadata_field: String,
    #[serde(default = "default_library_base_name")]
    pub library_base_name: String,
}

fn default_library_source() -> String {
    DEFAULT_LIBRARY_SOURCE.to_string()
}

fn default_alias() -> String {
    DEFAULT_ALIAS.to_string()
}

fn default_metadata_field() -> String {
    DEFAULT_METADATA_FIELD.to_string()
}

fn default_library_base_name() -> String {
    DEFAULT_LIBRARY_BASE_NAME.to_string()
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            library_source: default_library_source(),
            default_alias: default_alias(),
            metadata_field: default_metadata_field(),
            library_base_name: default_library_base_name(),
        }
    }
}
