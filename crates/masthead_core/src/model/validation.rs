//! Field validation rules shared by every entity.
//!
//! # Responsibility
//! - Define the single `ValidationError` kind raised by construction,
//!   setters and reassignment.
//! - Keep length bounds in one place so setters and constructors agree.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - A rule never trims its input; `"  "` is a non-empty name.
//!
//! # See also
//! - `crate::catalog` for the unknown-id checks.

use super::{ArticleId, AuthorId, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shortest accepted magazine name.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Longest accepted magazine name.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Shortest accepted article title.
pub const TITLE_MIN_CHARS: usize = 5;
/// Longest accepted article title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Result type used by every validated constructor and mutator.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejection raised synchronously at the point of violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is the empty string.
    EmptyAuthorName,
    /// Magazine name falls outside [2, 16] characters.
    MagazineNameLength { chars: usize },
    /// Magazine category is the empty string.
    EmptyCategory,
    /// Article title falls outside [5, 50] characters.
    TitleLength { chars: usize },
    /// Referenced author is not registered in the catalog.
    UnknownAuthor(AuthorId),
    /// Referenced magazine is not registered in the catalog.
    UnknownMagazine(MagazineId),
    /// Referenced article is not registered in the catalog.
    UnknownArticle(ArticleId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be non-empty"),
            Self::MagazineNameLength { chars } => write!(
                f,
                "magazine name must have {MAGAZINE_NAME_MIN_CHARS} to {MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be non-empty"),
            Self::TitleLength { chars } => write!(
                f,
                "article title must have {TITLE_MIN_CHARS} to {TITLE_MAX_CHARS} characters, got {chars}"
            ),
            Self::UnknownAuthor(id) => write!(f, "author not found: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not found: {id}"),
            Self::UnknownArticle(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for ValidationError {}

/// Accepts any non-empty name.
pub fn validate_author_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Accepts names of 2 to 16 characters inclusive.
pub fn validate_magazine_name(name: &str) -> ValidationResult<()> {
    let chars = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::MagazineNameLength { chars });
    }
    Ok(())
}

/// Accepts any non-empty category.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Accepts titles of 5 to 50 characters inclusive.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let chars = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::TitleLength { chars });
    }
    Ok(())
}
