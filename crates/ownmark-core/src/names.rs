//! Input file parsing.
//!
//! One principal name per line, `#` starts a comment line, blank lines are
//! ignored. Every other line must contain `@` (`NAME@DOMAIN`).

use std::path::Path;

use crate::error::{CoreError, Result};

const COMMENT_MARKER: char = '#';
const DOMAIN_SEPARATOR: char = '@';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Ordered list of principal names, in file order. Duplicates are kept.
pub type NameList = Vec<String>;

/// Load names from a file on disk.
///
/// Fails with [`CoreError::FileNotFound`] before reading anything if the
/// path is not a regular file, and with [`CoreError::MalformedInput`] on the
/// first line lacking a domain separator.
pub fn load_names(path: &Path) -> Result<NameList> {
    if !path.is_file() {
        return Err(CoreError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let names = parse_names(&text)?;
    tracing::debug!(path = %path.display(), count = names.len(), "Loaded node names");
    Ok(names)
}

/// Parse names from in-memory text.
pub fn parse_names(text: &str) -> Result<NameList> {
    let mut names = Vec::new();
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        if !line.contains(DOMAIN_SEPARATOR) {
            return Err(CoreError::MalformedInput {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        names.push(line.to_string());
    }

    Ok(names)
}
