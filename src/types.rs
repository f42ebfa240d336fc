use clap::Parser;
use std::fmt;
use std::path::PathBuf;

use crate::constants::{CODE_DELETE, CODE_GET, CODE_POST, CODE_PUT};

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Methods to test: c (POST), r (GET), u (PUT), d (DELETE). E.g., -m cr.
    #[arg(short, long, help_heading = "HTTP")]
    pub methods: Option<String>,

    /// File containing URLs, one per line.
    pub urls_file: PathBuf,

    // OUTPUT
    /// Optional output file to write the results (truncated on start).
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Show debug logs on stderr.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,
}

/// HTTP verb selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Map a single selection code to its verb. Unknown codes map to `None`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            CODE_GET => Some(Verb::Get),
            CODE_POST => Some(Verb::Post),
            CODE_PUT => Some(Verb::Put),
            CODE_DELETE => Some(Verb::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Parse a method code string into verbs, keeping input order and repeats
pub fn parse_methods(codes: &str) -> Vec<Verb> {
    codes.chars().filter_map(Verb::from_code).collect()
}

/// Result of a single request attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A response arrived, whatever its status.
    Success(reqwest::StatusCode),
    /// The request never produced a response.
    Failure(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}
