//! protoc argument resolution.
//!
//! Turns a raw protoc-style argument vector into a validated environment:
//!
//! ```text
//! Raw args → Classify → Bind/Capture → Expand @files → Merge → Resolve → ResolvedEnvironment
//! ```
//!
//! Argument files are expanded depth-first; each one is parsed as its own
//! invocation and its options are merged into the file that referenced it.

mod classifier;
mod directives;
mod environment;
mod error;
mod expander;
mod merge;
mod normalizer;
mod options;
mod pipeline;
mod registry;
mod resolver;

pub use classifier::{classify, ClassifiedArg};
pub use directives::{DirectiveCollector, DirectiveKind, PluginDirectiveIndex};
pub use environment::{PluginInvocationInfo, PluginTable, ResolvedEnvironment};
pub use error::{ArgsError, UnsupportedFlag};
pub use expander::{expand, read_argument_file, Expansion, ExpansionContext, ARGUMENT_FILE_SIGIL};
pub use merge::MergePolicy;
pub use normalizer::{normalize_name, NormalizedName};
pub use options::{OptionField, OptionSet, Slot, SlotMut};
pub use pipeline::resolve;
pub use registry::{
    flag_registry, FlagArity, FlagBehavior, FlagDef, DESCRIPTOR_SET_OUT, PLUGIN_NAME_PREFIX,
};
pub use resolver::{
    check_actionable, check_unsupported, resolve_directives, resolve_plugin_paths,
    split_out_value,
};
