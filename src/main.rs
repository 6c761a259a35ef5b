use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;

use protoc_compat::args::resolve;
use protoc_compat::config::{Config, CONFIG_PATH_ENV};
use protoc_compat::logging::init_tracing;

const CONFIG_FLAG: &str = "--compat-config";

/// Wrapper-owned flags. Everything else is protoc's and is passed through untouched.
#[derive(Parser, Debug)]
#[command(
    name = "protoc-compat",
    about = "Resolve a protoc command line into a validated build environment"
)]
struct Cli {
    /// Config file to use instead of ~/.config/protoc-compat/config.toml
    #[arg(long = "compat-config", env = CONFIG_PATH_ENV, value_name = "FILE")]
    config: Option<PathBuf>,

    /// protoc flags, input files and @argument files
    #[arg(
        value_name = "PROTOC_ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    protoc_args: Vec<String>,
}

impl Cli {
    /// Parse wrapper flags with clap and take protoc's arguments verbatim.
    fn parse_argv(argv: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let (wrapper, passthrough) = split_wrapper_args(argv);
        let mut cli = Cli::parse_from(wrapper);
        cli.protoc_args = passthrough
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| anyhow!("argument is not valid UTF-8: {}", arg.to_string_lossy()))
            })
            .collect::<Result<_>>()?;
        Ok(cli)
    }
}

/// Split argv into the wrapper's leading flags and protoc's arguments.
///
/// Wrapper flags must come first. The first token that is not one starts
/// protoc's arguments, which clap never sees, so a leading `--` reaches the
/// resolver intact.
fn split_wrapper_args(argv: impl IntoIterator<Item = OsString>) -> (Vec<OsString>, Vec<OsString>) {
    let mut argv = argv.into_iter();
    let mut wrapper: Vec<OsString> = argv.next().into_iter().collect();
    let mut passthrough = Vec::new();

    while let Some(arg) = argv.next() {
        let (is_wrapper, takes_value) = match arg.to_str() {
            Some(CONFIG_FLAG) => (true, true),
            Some(s) => (
                s.strip_prefix(CONFIG_FLAG).is_some_and(|v| v.starts_with('='))
                    || s == "-h"
                    || s == "--help",
                false,
            ),
            None => (false, false),
        };
        if !is_wrapper {
            passthrough.push(arg);
            passthrough.extend(argv.by_ref());
            break;
        }
        wrapper.push(arg);
        if takes_value {
            wrapper.extend(argv.next());
        }
    }

    (wrapper, passthrough)
}

fn main() -> ExitCode {
    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(argv: impl IntoIterator<Item = OsString>) -> Result<()> {
    let cli = Cli::parse_argv(argv)?;
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    tracing::debug!(
        path = %config_path.display(),
        found = config_path.exists(),
        "configuration loaded"
    );

    let env = resolve(&cli.protoc_args, &config.defaults)?;
    println!("{}", serde_json::to_string_pretty(&env)?);
    Ok(())
}
