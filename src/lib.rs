pub mod config;
pub mod constants;
pub mod http;
pub mod logging;
pub mod output;
pub mod processor;
pub mod types;
pub mod utils;

pub use config::Config;
pub use processor::{RunSummary, process_urls, run};
pub use types::{Cli, Outcome, Verb};
