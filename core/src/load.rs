//! Text ingestion for node and edge files.
//!
//! Node file: one URL-encoded label per line. Edge file: two URL-encoded
//! labels per line separated by whitespace, source first. In both, empty
//! lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use thiserror::Error;
use tracing::debug;

use crate::error::Error;
use crate::finder::{BuildOptions, PathFinder};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: cannot decode '{text}'")]
    Decode { line: usize, text: String },

    #[error("line {line}: expected two labels, got '{text}'")]
    MalformedEdge { line: usize, text: String },

    #[error(transparent)]
    Build(#[from] Error),
}

/// Decode an `application/x-www-form-urlencoded` label.
///
/// `+` becomes a space and `%XX` a byte. Byte sequences that are not valid
/// UTF-8 become U+FFFD. Returns None for a truncated or non-hex escape.
pub fn decode_label(raw: &str) -> Option<String> {
    if has_malformed_escape(raw) {
        return None;
    }
    let spaced = raw.replace('+', " ");
    Some(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}

/// Iterate the non-blank, non-comment lines of `reader` with 1-based line numbers.
fn content_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((idx + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(e)),
        })
}

/// Read label declarations, in file order.
pub fn read_labels<R: BufRead>(reader: R) -> Result<Vec<String>, LoadError> {
    let mut labels = Vec::new();
    for entry in content_lines(reader) {
        let (line, text) = entry?;
        let label = decode_label(&text).ok_or(LoadError::Decode { line, text })?;
        labels.push(label);
    }
    debug!(count = labels.len(), "read label declarations");
    Ok(labels)
}

/// Read `(source, target)` edge declarations, in file order.
///
/// Tokens after the second on a line are ignored.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<(String, String)>, LoadError> {
    let mut edges = Vec::new();
    for entry in content_lines(reader) {
        let (line, text) = entry?;
        let mut tokens = text.split_whitespace();
        let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
            return Err(LoadError::MalformedEdge {
                line,
                text: text.clone(),
            });
        };
        let decode = |raw: &str| {
            decode_label(raw).ok_or_else(|| LoadError::Decode {
                line,
                text: raw.to_string(),
            })
        };
        edges.push((decode(from)?, decode(to)?));
    }
    debug!(count = edges.len(), "read edge declarations");
    Ok(edges)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub fn read_labels_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    read_labels(open(path.as_ref())?)
}

pub fn read_edges_file(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, LoadError> {
    read_edges(open(path.as_ref())?)
}

/// Read both files and build a [`PathFinder`] from them.
pub fn load_path_finder(
    nodes: impl AsRef<Path>,
    edges: impl AsRef<Path>,
    options: BuildOptions,
) -> Result<PathFinder, LoadError> {
    let labels = read_labels_file(nodes)?;
    let edges = read_edges_file(edges)?;
    Ok(PathFinder::build_with(options, labels, edges)?)
}
