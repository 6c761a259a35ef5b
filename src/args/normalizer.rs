//! Flag-name normalization.
//!
//! Decides whether a long flag name is a plugin directive or a built-in flag,
//! before any registry lookup happens.

use crate::args::directives::DirectiveKind;
use crate::args::registry::DESCRIPTOR_SET_OUT;

/// Result of normalizing a long flag name (without the leading `--`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedName<'a> {
    /// `<plugin>_out` or `<plugin>_opt`. The plugin name keeps its spelling.
    Directive {
        plugin: &'a str,
        kind: DirectiveKind,
    },
    /// Built-in flag with hyphens canonicalized to underscores.
    Flag(String),
}

pub fn normalize_name(name: &str) -> NormalizedName<'_> {
    let canonical = name.replace('-', "_");
    if canonical == DESCRIPTOR_SET_OUT {
        return NormalizedName::Flag(canonical);
    }
    for kind in [DirectiveKind::Out, DirectiveKind::Opt] {
        if let Some(plugin) = name.strip_suffix(kind.suffix()) {
            if !plugin.is_empty() {
                return NormalizedName::Directive { plugin, kind };
            }
        }
    }
    NormalizedName::Flag(canonical)
}
