use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// Read an uploaded tabular file into memory. Only `.csv` is accepted.
pub async fn read_csv_file(path: &Path) -> Result<String> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if extension != "csv" {
        anyhow::bail!("unsupported file format '{}': expected .csv", extension);
    }

    let content = fs::read_to_string(path)
        .await
        .context(format!("failed to read dataset file: {:?}", path))?;

    Ok(content)
}
