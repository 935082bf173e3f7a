//! Payload input — a single JSON document or JSON Lines, from a file or
//! stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use ptrack_core::error::{parse_payload, parse_payload_lines, Error, Result};
use serde_json::Value;

/// Where payloads come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Source::File(path.to_path_buf()),
            _ => Source::Stdin,
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Source::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| Error::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(buf)
            }
            Source::File(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Read every payload from `source`. Without `lines` the whole input is a
/// single document.
pub fn read_payloads(source: &Source, lines: bool) -> Result<Vec<Value>> {
    let text = source.read_to_string()?;
    if lines {
        parse_payload_lines(&text)
    } else {
        Ok(vec![parse_payload(&text)?])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
