//! Raw args to classified args.
//!
//! Plugin directives are recognised by name shape first; only what remains is
//! looked up in the registry. Flags and positionals may be interleaved.

use std::collections::VecDeque;

use crate::args::directives::DirectiveKind;
use crate::args::error::ArgsError;
use crate::args::normalizer::{normalize_name, NormalizedName};
use crate::args::options::OptionField;
use crate::args::registry::{FlagArity, FlagDef};

/// A classified argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// `--<plugin>_out=value` or `--<plugin>_opt=value`.
    Directive {
        plugin: String,
        kind: DirectiveKind,
        value: String,
    },
    /// Built-in flag with optional value.
    Flag {
        field: OptionField,
        flag: String, // as spelled on the command line, without any value
        value: Option<String>,
    },
    /// Positional argument: an input file or an `@file` reference.
    Positional(String),
}

/// Classify raw args against the registry.
pub fn classify(raw_args: &[String], registry: &[FlagDef]) -> Result<Vec<ClassifiedArg>, ArgsError> {
    let mut args = Vec::with_capacity(raw_args.len());
    let mut queue: VecDeque<&String> = raw_args.iter().collect();

    while let Some(arg) = queue.pop_front() {
        if arg == "--" {
            args.extend(queue.drain(..).map(|a| ClassifiedArg::Positional(a.clone())));
            break;
        }

        if let Some(body) = arg.strip_prefix("--") {
            classify_long(body, &mut queue, registry, &mut args)?;
        } else if arg.len() > 1 && arg.starts_with('-') {
            classify_short(&arg[1..], &mut queue, registry, &mut args)?;
        } else {
            args.push(ClassifiedArg::Positional(arg.clone()));
        }
    }

    Ok(args)
}

fn classify_long(
    body: &str,
    queue: &mut VecDeque<&String>,
    registry: &[FlagDef],
    args: &mut Vec<ClassifiedArg>,
) -> Result<(), ArgsError> {
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let flag = format!("--{name}");

    match normalize_name(name) {
        NormalizedName::Directive { plugin, kind } => {
            let value = take_value(&flag, inline, queue)?;
            args.push(ClassifiedArg::Directive {
                plugin: plugin.to_string(),
                kind,
                value,
            });
        }
        NormalizedName::Flag(canonical) => {
            let def = registry
                .iter()
                .find(|d| d.matches_long(&canonical))
                .ok_or_else(|| ArgsError::UnknownFlag { flag: flag.clone() })?;
            let value = match def.arity {
                FlagArity::NoValue => inline.map(String::from),
                FlagArity::RequiresValue => Some(take_value(&flag, inline, queue)?),
            };
            args.push(ClassifiedArg::Flag {
                field: def.field,
                flag,
                value,
            });
        }
    }
    Ok(())
}

/// `-Ifoo`, `-I foo`, `-I=foo`. Boolean shorthands may be clustered.
fn classify_short(
    mut rest: &str,
    queue: &mut VecDeque<&String>,
    registry: &[FlagDef],
    args: &mut Vec<ClassifiedArg>,
) -> Result<(), ArgsError> {
    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        let flag = format!("-{c}");
        let def = registry
            .iter()
            .find(|d| d.matches_short(c))
            .ok_or_else(|| ArgsError::UnknownFlag { flag: flag.clone() })?;

        let inline = rest.strip_prefix('=');
        match def.arity {
            FlagArity::NoValue => {
                args.push(ClassifiedArg::Flag {
                    field: def.field,
                    flag,
                    value: inline.map(String::from),
                });
                if inline.is_some() {
                    break;
                }
            }
            FlagArity::RequiresValue => {
                let attached = inline.or((!rest.is_empty()).then_some(rest));
                let value = take_value(&flag, attached, queue)?;
                args.push(ClassifiedArg::Flag {
                    field: def.field,
                    flag,
                    value: Some(value),
                });
                break;
            }
        }
    }
    Ok(())
}

/// Inline value if present, otherwise the next token whatever it looks like.
fn take_value(
    flag: &str,
    inline: Option<&str>,
    queue: &mut VecDeque<&String>,
) -> Result<String, ArgsError> {
    match inline {
        Some(value) => Ok(value.to_string()),
        None => queue
            .pop_front()
            .cloned()
            .ok_or_else(|| ArgsError::MissingValue {
                flag: flag.to_string(),
            }),
    }
}
