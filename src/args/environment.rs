//! The resolved, validated invocation handed to downstream collaborators.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::ErrorFormat;

/// What to run for one code generation plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PluginInvocationInfo {
    /// Output location. Empty until an `_out` directive is seen.
    pub out: String,
    /// Options string passed to the plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt: Option<String>,
    /// Explicit executable path from `--plugin`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Plugin key (executable name without the `protoc-gen-` prefix) → invocation.
pub type PluginTable = BTreeMap<String, PluginInvocationInfo>;

/// Fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEnvironment {
    pub include_dir_paths: Vec<String>,
    pub include_imports: bool,
    pub include_source_info: bool,
    pub print_free_field_numbers: bool,
    /// Descriptor set output location, if requested.
    pub output: Option<String>,
    pub error_format: ErrorFormat,
    pub plugins: PluginTable,
    /// Input files in encounter order. Never empty.
    pub file_paths: Vec<String>,
}
