use anyhow::{Context, Result};
use std::path::Path;

/// Read the URL list: one entry per line, trimmed, blank lines kept as empty strings
pub async fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read URLs file {}", path.display()))?;
    Ok(split_url_lines(&content))
}

/// Split file content into trimmed lines
pub fn split_url_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}
