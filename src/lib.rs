//! protoc-compatible command-line resolution.
//!
//! [`args::resolve`] turns a protoc argument vector, including nested `@file`
//! argument files and `--<plugin>_out`/`--<plugin>_opt` directives, into a
//! [`args::ResolvedEnvironment`] for descriptor building and plugin execution.

pub mod args;
pub mod config;
pub mod logging;
