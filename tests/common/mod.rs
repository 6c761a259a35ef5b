//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use protoc_compat::args::{resolve, ArgsError, ResolvedEnvironment};
use protoc_compat::config::Defaults;
use tempfile::TempDir;

pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Resolve with built-in defaults.
pub fn resolve_args(args: &[String]) -> Result<ResolvedEnvironment, ArgsError> {
    resolve(args, &Defaults::default())
}

/// A temp directory holding argument files.
pub struct ArgFiles {
    dir: TempDir,
}

impl ArgFiles {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `name` with `content` and return its `@path` reference.
    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write argument file");
        self.reference(name)
    }

    /// `@path` reference to `name`, whether or not it exists.
    pub fn reference(&self, name: &str) -> String {
        format!("@{}", self.path(name).display())
    }
}
