//! Marker-delimited text splicing.
//!
//! Pure string functions, no file IO, so the README and index editing can be
//! tested directly.

use thiserror::Error;

/// A marker the splice depends on could not be found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpliceError {
    #[error("missing marker: {0}")]
    MissingMarker(String),
}

/// Replace everything from `start` through `end` (markers included) with
/// `start + content + end`. Text outside the markers is left untouched.
///
/// The end marker is searched after the start marker.
pub fn splice_region(
    text: &str,
    start: &str,
    end: &str,
    content: &str,
) -> Result<String, SpliceError> {
    let start_index = text
        .find(start)
        .ok_or_else(|| SpliceError::MissingMarker(start.to_string()))?;
    let after_start = start_index + start.len();
    let end_index = text[after_start..]
        .find(end)
        .map(|offset| after_start + offset)
        .ok_or_else(|| SpliceError::MissingMarker(end.to_string()))?;

    let mut spliced =
        String::with_capacity(text.len() - (end_index - after_start) + content.len());
    spliced.push_str(&text[..start_index]);
    spliced.push_str(start);
    spliced.push_str(content);
    spliced.push_str(&text[end_index..]);
    Ok(spliced)
}

/// Insert `line` on its own line immediately before the first `marker`,
/// keeping the marker at its original indentation.
///
/// `line` is written at the marker's indentation and followed by a newline.
pub fn insert_before_marker(text: &str, marker: &str, line: &str) -> Result<String, SpliceError> {
    let index = text
        .find(marker)
        .ok_or_else(|| SpliceError::MissingMarker(marker.to_string()))?;
    let line_start = text[..index].rfind('\n').map_or(0, |i| i + 1);
    let indent: String = text[line_start..index]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(text.len() + line.len() + indent.len() + 1);
    out.push_str(&text[..index]);
    out.push_str(line);
    out.push('\n');
    out.push_str(&indent);
    out.push_str(&text[index..]);
    Ok(out)
}
