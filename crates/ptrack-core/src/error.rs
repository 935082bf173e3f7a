//! Errors for everything around the normalizer.
//!
//! Normalization itself cannot fail. These cover loading configuration and
//! reading payloads from disk or stdin.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: payload is not valid JSON: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse one JSON document.
pub fn parse_payload(input: &str) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(input)?)
}

/// Parse JSON Lines, skipping blank lines. Line numbers are 1-based.
pub fn parse_payload_lines(input: &str) -> Result<Vec<serde_json::Value>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| Error::JsonLine {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
