//! Errors produced while resolving a protoc argument vector.
//!
//! Messages are fixed text: build tooling greps stderr for them, so treat any
//! change to a `#[error]` string as a breaking change.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ErrorFormat;

/// Legacy protoc flags that are recognised only so they can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFlag {
    Encode,
    Decode,
    DecodeRaw,
    DescriptorSetIn,
}

impl UnsupportedFlag {
    pub fn flag_name(self) -> &'static str {
        match self {
            UnsupportedFlag::Encode => "encode",
            UnsupportedFlag::Decode => "decode",
            UnsupportedFlag::DecodeRaw => "decode_raw",
            UnsupportedFlag::DescriptorSetIn => "descriptor_set_in",
        }
    }
}

/// Errors that can occur while resolving arguments.
///
/// Every variant is terminal: resolution stops at the first one.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("empty argument specified")]
    EmptyArgument,

    #[error("{path} recursively referenced")]
    RecursiveReference { path: String },

    #[error("open {}: {source}", .path.display())]
    ArgumentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },

    #[error("flag needs an argument: {flag}")]
    MissingValue { flag: String },

    #[error("invalid argument {value:?} for {flag}: expected a boolean")]
    InvalidBoolValue { flag: String, value: String },

    #[error("--{plugin}_out had multiple colons in {value:?}")]
    AmbiguousOutSyntax { plugin: String, value: String },

    #[error("duplicate --{plugin}_out")]
    DuplicateOut { plugin: String },

    #[error("duplicate --{plugin}_opt")]
    DuplicateOptions { plugin: String },

    #[error("--plugin had an empty value")]
    EmptyPluginPath,

    #[error("--plugin name must start with {prefix}: {name}")]
    InvalidPluginNamePrefix { name: String, prefix: &'static str },

    #[error("duplicate --plugin for {prefix}{plugin}")]
    DuplicatePluginPath { plugin: String, prefix: &'static str },

    #[error("cannot specify --{plugin}_opt without --{plugin}_out")]
    OptWithoutOut { plugin: String },

    #[error("cannot specify --plugin={prefix}{plugin} without --{plugin}_out")]
    PathWithoutOut { plugin: String, prefix: &'static str },

    #[error("--{} is not supported", .flag.flag_name())]
    UnsupportedFeature { flag: UnsupportedFlag },

    #[error("invalid error format {value:?}: must be one of {}", ErrorFormat::ALL_NAMES.join(", "))]
    InvalidErrorFormat { value: String },

    #[error("no input files specified")]
    NoInputFiles,
}

impl ArgsError {
    /// Stable machine-readable identifier for the error.
    pub fn kind(&self) -> &'static str {
        match self {
            ArgsError::EmptyArgument => "argument_format",
            ArgsError::RecursiveReference { .. } => "recursive_reference",
            ArgsError::ArgumentFile { .. } => "argument_file_io",
            ArgsError::UnknownFlag { .. } => "unknown_flag",
            ArgsError::MissingValue { .. } => "missing_value",
            ArgsError::InvalidBoolValue { .. } => "invalid_bool_value",
            ArgsError::AmbiguousOutSyntax { .. } => "ambiguous_out_syntax",
            ArgsError::DuplicateOut { .. } => "duplicate_out",
            ArgsError::DuplicateOptions { .. } => "duplicate_options",
            ArgsError::EmptyPluginPath => "empty_plugin_path",
            ArgsError::InvalidPluginNamePrefix { .. } => "invalid_plugin_name_prefix",
            ArgsError::DuplicatePluginPath { .. } => "duplicate_plugin_path",
            ArgsError::OptWithoutOut { .. } => "opt_without_out",
            ArgsError::PathWithoutOut { .. } => "path_without_out",
            ArgsError::UnsupportedFeature { .. } => "unsupported_feature",
            ArgsError::InvalidErrorFormat { .. } => "invalid_error_format",
            ArgsError::NoInputFiles => "no_input_files",
        }
    }
}
