//! Resolution entry point: runs every stage in order.

use crate::args::environment::ResolvedEnvironment;
use crate::args::error::ArgsError;
use crate::args::expander::{expand, ExpansionContext};
use crate::args::registry::flag_registry;
use crate::args::resolver::{check_actionable, check_unsupported};
use crate::config::{Defaults, ErrorFormat};

/// Resolve a protoc argument vector into a validated environment.
///
/// This is the main entry point for the argument pipeline.
///
/// # Arguments
///
/// * `raw_args` - Arguments as given to protoc, without the program name
/// * `defaults` - Values for include paths and error format when none were given
///
/// # Returns
///
/// A complete `ResolvedEnvironment`, or the first error encountered. Nothing
/// partial is ever returned.
pub fn resolve(raw_args: &[String], defaults: &Defaults) -> Result<ResolvedEnvironment, ArgsError> {
    let registry = flag_registry();
    let mut ctx = ExpansionContext::new();

    // Stage 1: Expand argument files, capture options and directives
    let expansion = expand(raw_args, &registry, &mut ctx)?;
    let options = expansion.options;

    // Stage 2: Reject legacy flags
    check_unsupported(&options, &registry)?;

    // Stage 3: Every plugin must have somewhere to write
    check_actionable(ctx.plugins())?;

    // Stage 4: Apply defaults
    let include_dir_paths = if options.include_dir_paths.is_empty() {
        defaults.include_paths.clone()
    } else {
        options.include_dir_paths
    };
    let error_format = if options.error_format.is_empty() {
        &defaults.error_format
    } else {
        &options.error_format
    };
    let error_format =
        ErrorFormat::parse(error_format).ok_or_else(|| ArgsError::InvalidErrorFormat {
            value: error_format.clone(),
        })?;

    if expansion.file_paths.is_empty() {
        return Err(ArgsError::NoInputFiles);
    }

    let plugins = ctx.into_plugins();
    tracing::debug!(
        files = expansion.file_paths.len(),
        plugins = plugins.len(),
        "resolved protoc arguments"
    );

    Ok(ResolvedEnvironment {
        include_dir_paths,
        include_imports: options.include_imports,
        include_source_info: options.include_source_info,
        print_free_field_numbers: options.print_free_field_numbers,
        output: (!options.output.is_empty()).then_some(options.output),
        error_format,
        plugins,
        file_paths: expansion.file_paths,
    })
}
