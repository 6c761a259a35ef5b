//! Recursive `@file` argument expansion.
//!
//! Each argument file is parsed as its own invocation with a fresh option set
//! and directive collector. The visited set and the plugin table live in the
//! [`ExpansionContext`] and are shared by the whole chain, which is what lets
//! cycles and cross-file duplicate directives be detected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::args::classifier::{classify, ClassifiedArg};
use crate::args::directives::DirectiveCollector;
use crate::args::environment::PluginTable;
use crate::args::error::ArgsError;
use crate::args::options::OptionSet;
use crate::args::registry::FlagDef;
use crate::args::resolver::{resolve_directives, resolve_plugin_paths};

/// Prefix marking a positional argument as an argument-file reference.
pub const ARGUMENT_FILE_SIGIL: char = '@';

/// State shared across one resolution's whole expansion chain.
#[derive(Debug, Default)]
pub struct ExpansionContext {
    visited: HashSet<String>,
    plugins: PluginTable,
}

impl ExpansionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plugins(&self) -> &PluginTable {
        &self.plugins
    }

    pub fn into_plugins(self) -> PluginTable {
        self.plugins
    }
}

/// Output of one expansion: its merged options and its input files.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub options: OptionSet,
    /// Input files contributed by this expansion and everything nested in it,
    /// depth-first, left to right.
    pub file_paths: Vec<String>,
}

/// Expand `args`, recursing into every `@file` reference.
///
/// An argument file may be referenced once per resolution; a second reference
/// anywhere in the chain is reported as recursive.
pub fn expand(
    args: &[String],
    registry: &[FlagDef],
    ctx: &mut ExpansionContext,
) -> Result<Expansion, ArgsError> {
    let mut options = OptionSet::default();
    let mut collector = DirectiveCollector::new();
    let mut positionals = Vec::new();

    for arg in classify(args, registry)? {
        match arg {
            ClassifiedArg::Directive {
                plugin,
                kind,
                value,
            } => collector.record(&plugin, kind, value),
            ClassifiedArg::Flag { field, flag, value } => {
                options.bind(field, &flag, value.as_deref())?
            }
            ClassifiedArg::Positional(arg) => positionals.push(arg),
        }
    }

    resolve_directives(&collector, &mut ctx.plugins)?;
    resolve_plugin_paths(&options.plugin_path_values, &mut ctx.plugins)?;

    let mut file_paths = Vec::with_capacity(positionals.len());
    for arg in positionals {
        if arg.is_empty() {
            return Err(ArgsError::EmptyArgument);
        }
        if !arg.starts_with(ARGUMENT_FILE_SIGIL) {
            file_paths.push(arg);
            continue;
        }
        let path = &arg[ARGUMENT_FILE_SIGIL.len_utf8()..];

        if !ctx.visited.insert(path.to_string()) {
            return Err(ArgsError::RecursiveReference {
                path: path.to_string(),
            });
        }
        let nested_args = read_argument_file(Path::new(path))?;
        tracing::debug!(path, args = nested_args.len(), "expanding argument file");

        let nested = expand(&nested_args, registry, ctx)?;
        options.merge(&nested.options);
        file_paths.extend(nested.file_paths);
    }

    Ok(Expansion {
        options,
        file_paths,
    })
}

/// One argument per non-blank line, surrounding whitespace trimmed.
pub fn read_argument_file(path: &Path) -> Result<Vec<String>, ArgsError> {
    let content = fs::read_to_string(path).map_err(|e| ArgsError::ArgumentFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(split_argument_lines(&content))
}

fn split_argument_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
