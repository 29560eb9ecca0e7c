use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::model::ids::PatternId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("pattern name cannot be empty")]
    EmptyName,

    #[error("pattern intent text cannot be empty")]
    EmptyIntent,

    #[error("pattern highlight text cannot be empty")]
    EmptyHighlights,

    #[error("image reference cannot be empty")]
    EmptyImagePath,

    #[error("image URL is not valid: {0}")]
    InvalidImageUrl(String),
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Reference to the structure diagram shown for a pattern.
///
/// The engine never loads or renders images; it hands this reference to the
/// presentation layer inside a display instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    FilePath(PathBuf),
    Url(Url),
}

impl ImageRef {
    /// Creates a file-path image reference.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::EmptyImagePath` if the path is empty.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, PatternError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(PatternError::EmptyImagePath);
        }
        Ok(ImageRef::FilePath(p))
    }

    /// Creates a URL image reference.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::EmptyImagePath` for an empty string and
    /// `PatternError::InvalidImageUrl` when the string does not parse.
    pub fn from_url(url: impl AsRef<str>) -> Result<Self, PatternError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(PatternError::EmptyImagePath);
        }
        let u = Url::parse(s).map_err(|_| PatternError::InvalidImageUrl(s.to_owned()))?;
        Ok(ImageRef::Url(u))
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ImageRef::FilePath(p) => Some(p.as_path()),
            ImageRef::Url(_) => None,
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            ImageRef::Url(u) => Some(u),
            ImageRef::FilePath(_) => None,
        }
    }
}

//
// ─── PATTERN ───────────────────────────────────────────────────────────────────
//

/// One design-pattern concept: id, name, explanatory texts, diagram image.
///
/// `intent` is the on-demand hint text; `highlights` is the feedback text
/// shown after a guess. Both are multi-line blocks, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    id: PatternId,
    name: String,
    intent: String,
    highlights: String,
    image: ImageRef,
}

impl Pattern {
    /// Creates a validated pattern record.
    ///
    /// # Errors
    ///
    /// Returns a `PatternError` if the name, intent, or highlight text is
    /// empty or whitespace-only.
    pub fn new(
        id: PatternId,
        name: impl Into<String>,
        intent: impl Into<String>,
        highlights: impl Into<String>,
        image: ImageRef,
    ) -> Result<Self, PatternError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PatternError::EmptyName);
        }
        let intent = intent.into();
        if intent.trim().is_empty() {
            return Err(PatternError::EmptyIntent);
        }
        let highlights = highlights.into();
        if highlights.trim().is_empty() {
            return Err(PatternError::EmptyHighlights);
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            intent,
            highlights,
            image,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> PatternId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn intent(&self) -> &str {
        &self.intent
    }

    #[must_use]
    pub fn highlights(&self) -> &str {
        &self.highlights
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
