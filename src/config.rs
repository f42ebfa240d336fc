use std::path::PathBuf;

use crate::types::{Cli, Verb, parse_methods};

/// Resolved run configuration, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub methods: Vec<Verb>,
    pub urls_file: PathBuf,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            methods: parse_methods(cli.methods.as_deref().unwrap_or_default()),
            urls_file: cli.urls_file.clone(),
            output: cli.output.clone(),
        }
    }

    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }
}
