//! Article join record.
//!
//! # Invariants
//! - `author` and `magazine` always reference records registered in the
//!   same catalog.
//! - `title` is fixed at construction; only the two links can be rebound.

use super::validation::{validate_title, ValidationResult};
use super::{ArticleId, AuthorId, MagazineId};
use serde::Serialize;
use uuid::Uuid;

/// Binds exactly one author to exactly one magazine under a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Stable identity assigned at construction.
    id: ArticleId,
    /// Owning author; rebound only by `Catalog::reassign_author`.
    author: AuthorId,
    /// Publishing magazine; rebound only by `Catalog::reassign_magazine`.
    magazine: MagazineId,
    /// Title of 5 to 50 characters, fixed at construction.
    title: String,
}

impl Article {
    /// Validates only the title; the catalog resolves both ids beforehand.
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            author,
            magazine,
            title,
        })
    }

    /// Stable article identity.
    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine
    }

    /// Read-only in every variant.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
