//! Page splitting.

use lumiere_error::{IngestError, IngestErrorKind};
use regex::Regex;

/// Splits story text into pages at blank lines.
///
/// Line endings are normalized first. Each page is trimmed and empty pages are dropped.
/// Text without any blank line is a single page.
///
/// # Examples
///
/// ```
/// use lumiere_ingest::split_pages;
///
/// let pages = split_pages("One\r\n\r\n  \r\nTwo\n\n\nThree").unwrap();
/// assert_eq!(pages, vec!["One", "Two", "Three"]);
/// ```
pub fn split_pages(text: &str) -> Result<Vec<String>, IngestError> {
    let normalized = text.replace("\r\n", "\n");
    let re = Regex::new(r"\n\s*\n").map_err(|e| {
        IngestError::new(IngestErrorKind::Parse(format!(
            "Invalid page separator: {}",
            e
        )))
    })?;

    let pages: Vec<String> = re
        .split(&normalized)
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .map(str::to_string)
        .collect();

    if pages.is_empty() {
        let whole = normalized.trim();
        if whole.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![whole.to_string()]);
    }
    Ok(pages)
}
