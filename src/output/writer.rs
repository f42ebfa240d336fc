use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Writes every line to the console and, when configured, to the output file
pub struct Reporter<W: Write> {
    console: W,
    sink: Option<File>,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter. An existing output file is truncated here, once.
    pub async fn new(console: W, output: Option<&Path>) -> Result<Self> {
        let sink = match output {
            Some(path) => Some(
                File::create(path)
                    .await
                    .with_context(|| format!("Failed to create output file {}", path.display()))?,
            ),
            None => None,
        };
        Ok(Self { console, sink })
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    /// Emit text to the console and the sink, flushing both right away.
    pub async fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .console
            .write_all(text.as_bytes())
            .and_then(|_| self.console.flush())
        {
            eprintln!("{} Error writing to stdout: {}", "[Warning]".yellow(), e);
        }

        if let Some(file) = self.sink.as_mut() {
            let written = match file.write_all(text.as_bytes()).await {
                Ok(()) => file.flush().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                tracing::warn!(error = %e, "sink write failed");
                eprintln!("{} Error writing to output file: {}", "[Warning]".yellow(), e);
            }
        }
    }
}
