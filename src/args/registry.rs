//! The built-in protoc flags.

use crate::args::error::UnsupportedFlag;
use crate::args::options::OptionField;

/// Long name of the descriptor output flag. Never treated as a plugin directive.
pub const DESCRIPTOR_SET_OUT: &str = "descriptor_set_out";

/// Prefix every plugin executable name must carry.
pub const PLUGIN_NAME_PREFIX: &str = "protoc-gen-";

/// How the resolver treats a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBehavior {
    /// Bound into the option set and handed to downstream collaborators.
    Supported,
    /// Accepted by the parser only so resolution can reject it by name.
    Unsupported(UnsupportedFlag),
}

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag (e.g., --include_imports). Accepts an optional `=true|false`.
    NoValue,
    /// Requires exactly one value, inline after `=` or as the next token.
    RequiresValue,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Canonical long name without dashes (e.g., "proto_path").
    pub long: &'static str,
    /// Optional short form (e.g., 'I').
    pub short: Option<char>,
    /// Does it take a value?
    pub arity: FlagArity,
    /// How the resolver handles it.
    pub behavior: FlagBehavior,
    /// Option slot the value is bound into.
    pub field: OptionField,
    /// Human-readable description.
    pub description: &'static str,
}

/// Build the complete flag registry.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        // === Supported flags ===
        FlagDef {
            long: "proto_path",
            short: Some('I'),
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::IncludeDirPaths,
            description: "The include directory paths",
        },
        FlagDef {
            long: "include_imports",
            short: None,
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::IncludeImports,
            description: "Include imports in the resulting FileDescriptorSet",
        },
        FlagDef {
            long: "include_source_info",
            short: None,
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::IncludeSourceInfo,
            description: "Include source info in the resulting FileDescriptorSet",
        },
        FlagDef {
            long: "print_free_field_numbers",
            short: None,
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::PrintFreeFieldNumbers,
            description: "Print the free field numbers of all messages",
        },
        FlagDef {
            long: DESCRIPTOR_SET_OUT,
            short: Some('o'),
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::Output,
            description: "The location to write the FileDescriptorSet",
        },
        FlagDef {
            long: "error_format",
            short: None,
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::ErrorFormat,
            description: "The error format to use",
        },
        FlagDef {
            long: "plugin",
            short: None,
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Supported,
            field: OptionField::PluginPathValues,
            description: "Plugin executable, as path/to/protoc-gen-foo or protoc-gen-foo=path/to/binary",
        },
        // === Legacy flags, rejected after parsing ===
        FlagDef {
            long: "encode",
            short: None,
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Unsupported(UnsupportedFlag::Encode),
            field: OptionField::Encode,
            description: "Not supported",
        },
        FlagDef {
            long: "decode",
            short: None,
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Unsupported(UnsupportedFlag::Decode),
            field: OptionField::Decode,
            description: "Not supported",
        },
        FlagDef {
            long: "decode_raw",
            short: None,
            arity: FlagArity::NoValue,
            behavior: FlagBehavior::Unsupported(UnsupportedFlag::DecodeRaw),
            field: OptionField::DecodeRaw,
            description: "Not supported",
        },
        FlagDef {
            long: "descriptor_set_in",
            short: None,
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Unsupported(UnsupportedFlag::DescriptorSetIn),
            field: OptionField::DescriptorSetIn,
            description: "Not supported",
        },
    ]
}

impl FlagDef {
    /// Check if this definition has the given canonical long name.
    pub fn matches_long(&self, name: &str) -> bool {
        self.long == name
    }

    /// Check if this definition has the given short alias.
    pub fn matches_short(&self, c: char) -> bool {
        self.short == Some(c)
    }
}
