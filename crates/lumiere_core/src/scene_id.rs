//! Scene identifiers.

use lumiere_error::{PipelineError, PipelineErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies one scene of a project.
///
/// The string form is `"cover"`, a 1-based page number, or `"end"`. Ordering follows
/// reading order: the cover first, then pages by number, then the end.
///
/// # Examples
///
/// ```
/// use lumiere_core::SceneId;
///
/// let page: SceneId = "3".parse().unwrap();
/// assert_eq!(page, SceneId::Page(3));
/// assert_eq!(page.to_string(), "3");
/// assert!(SceneId::Cover < page && page < SceneId::End);
/// assert!("0".parse::<SceneId>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(into = "String", try_from = "String")]
pub enum SceneId {
    /// Opening sequence built from the cover illustration
    #[display("cover")]
    Cover,
    /// A numbered story page, starting at 1
    #[display("{}", _0)]
    Page(u32),
    /// Closing sequence built from story-wide context
    #[display("end")]
    End,
}

impl SceneId {
    /// Whether the first generation of this scene needs an uploaded illustration.
    pub fn requires_illustration(&self) -> bool {
        !matches!(self, SceneId::End)
    }
}

impl FromStr for SceneId {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(SceneId::Cover),
            "end" => Ok(SceneId::End),
            other => match other.parse::<u32>() {
                Ok(n) if n > 0 && !other.starts_with('+') => Ok(SceneId::Page(n)),
                _ => Err(PipelineError::new(PipelineErrorKind::UnknownScene(
                    other.to_string(),
                ))),
            },
        }
    }
}

impl From<SceneId> for String {
    fn from(id: SceneId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SceneId {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_canonical_pages() {
        for raw in ["0", "-1", "+2", "01x", "", "Cover", "page1"] {
            assert!(raw.parse::<SceneId>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn only_end_skips_illustration() {
        assert!(SceneId::Cover.requires_illustration());
        assert!(SceneId::Page(1).requires_illustration());
        assert!(!SceneId::End.requires_illustration());
    }
}
