use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values applied after argument resolution when the command line left them unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Include directories used when no `-I`/`--proto_path` is given (default: ["."]).
    #[serde(default = "default_include_paths")]
    pub include_paths: Vec<String>,
    /// Error format used when no `--error_format` is given (default: "gcc").
    #[serde(default = "default_error_format")]
    pub error_format: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_include_paths() -> Vec<String> {
    vec![".".to_string()]
}

fn default_error_format() -> String {
    "gcc".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            include_paths: default_include_paths(),
            error_format: default_error_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Diagnostic output format understood by the downstream compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorFormat {
    Text,
    Json,
    Msvs,
}

impl ErrorFormat {
    /// Every accepted spelling, aliases included.
    pub const ALL_NAMES: &'static [&'static str] = &["text", "gcc", "json", "msvs"];

    /// Parse a format name. `gcc` is an alias for `text`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" | "gcc" => Some(Self::Text),
            "json" => Some(Self::Json),
            "msvs" => Some(Self::Msvs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Msvs => "msvs",
        }
    }
}
