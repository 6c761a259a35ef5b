//! Plugin table construction and post-expansion checks.

use std::path::Path;

use crate::args::directives::{DirectiveCollector, DirectiveKind};
use crate::args::environment::{PluginInvocationInfo, PluginTable};
use crate::args::error::ArgsError;
use crate::args::options::OptionSet;
use crate::args::registry::{FlagBehavior, FlagDef, PLUGIN_NAME_PREFIX};

/// Fold one expansion's directives into the shared plugin table.
///
/// The table is shared by every expansion of a resolution, so an `_out` or
/// `_opt` already recorded by another argument file is a duplicate too.
pub fn resolve_directives(
    collector: &DirectiveCollector,
    plugins: &mut PluginTable,
) -> Result<(), ArgsError> {
    if let Some((plugin, kind)) = collector.first_duplicate() {
        return Err(duplicate_error(plugin, kind));
    }

    for (name, index) in collector.iter() {
        if let Some(value) = index.out.and_then(|i| collector.value(i)) {
            let (opt, out) = split_out_value(name, value)?;
            let info = plugin_entry(plugins, name);
            if !info.out.is_empty() {
                return Err(duplicate_error(name, DirectiveKind::Out));
            }
            info.out = out.to_string();
            if let Some(opt) = opt {
                if info.opt.is_some() {
                    return Err(duplicate_error(name, DirectiveKind::Opt));
                }
                info.opt = Some(opt.to_string());
            }
        }

        if let Some(value) = index.opt.and_then(|i| collector.value(i)) {
            let info = plugin_entry(plugins, name);
            if info.opt.is_some() {
                return Err(duplicate_error(name, DirectiveKind::Opt));
            }
            if !value.is_empty() {
                info.opt = Some(value.to_string());
            }
        }
    }
    Ok(())
}

/// Split `opt:out`. Returns `(options, output)`; empty options count as none.
pub fn split_out_value<'a>(
    plugin: &str,
    value: &'a str,
) -> Result<(Option<&'a str>, &'a str), ArgsError> {
    let parts: Vec<&str> = value.split(':').collect();
    match parts.as_slice() {
        [out] => Ok((None, *out)),
        [opt, out] => Ok(((!opt.is_empty()).then_some(*opt), *out)),
        _ => Err(ArgsError::AmbiguousOutSyntax {
            plugin: plugin.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Record explicit `--plugin` executable paths.
///
/// Accepts `protoc-gen-foo=path/to/binary` or a bare `path/to/protoc-gen-foo`,
/// whose base name supplies the plugin name.
pub fn resolve_plugin_paths(values: &[String], plugins: &mut PluginTable) -> Result<(), ArgsError> {
    for value in values {
        if value.is_empty() {
            return Err(ArgsError::EmptyPluginPath);
        }
        let (name, path) = match value.split_once('=') {
            Some((name, path)) => (name, path),
            None => {
                let base = Path::new(value)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(value.as_str());
                (base, value.as_str())
            }
        };
        let plugin = name.strip_prefix(PLUGIN_NAME_PREFIX).ok_or_else(|| {
            ArgsError::InvalidPluginNamePrefix {
                name: name.to_string(),
                prefix: PLUGIN_NAME_PREFIX,
            }
        })?;

        let info = plugin_entry(plugins, plugin);
        if info.path.is_some() {
            return Err(ArgsError::DuplicatePluginPath {
                plugin: plugin.to_string(),
                prefix: PLUGIN_NAME_PREFIX,
            });
        }
        tracing::debug!(plugin, path, "explicit plugin path");
        info.path = Some(path.to_string());
    }
    Ok(())
}

/// Reject legacy flags, in registry order.
pub fn check_unsupported(options: &OptionSet, registry: &[FlagDef]) -> Result<(), ArgsError> {
    for def in registry {
        if let FlagBehavior::Unsupported(flag) = def.behavior {
            if options.is_set(def.field) {
                return Err(ArgsError::UnsupportedFeature { flag });
            }
        }
    }
    Ok(())
}

/// Every plugin with options or a path must also have an output location.
pub fn check_actionable(plugins: &PluginTable) -> Result<(), ArgsError> {
    for (plugin, info) in plugins {
        if info.out.is_empty() && info.opt.is_some() {
            return Err(ArgsError::OptWithoutOut {
                plugin: plugin.clone(),
            });
        }
        if info.out.is_empty() && info.path.is_some() {
            return Err(ArgsError::PathWithoutOut {
                plugin: plugin.clone(),
                prefix: PLUGIN_NAME_PREFIX,
            });
        }
    }
    Ok(())
}

fn plugin_entry<'t>(plugins: &'t mut PluginTable, name: &str) -> &'t mut PluginInvocationInfo {
    plugins.entry(name.to_string()).or_default()
}

fn duplicate_error(plugin: &str, kind: DirectiveKind) -> ArgsError {
    let plugin = plugin.to_string();
    match kind {
        DirectiveKind::Out => ArgsError::DuplicateOut { plugin },
        DirectiveKind::Opt => ArgsError::DuplicateOptions { plugin },
    }
}
