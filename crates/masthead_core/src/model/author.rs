//! Author record.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - `articles` lists each linked article id exactly once.
//!
//! # See also
//! - `crate::catalog::AuthorView` for derived queries.

use super::validation::{validate_author_name, ValidationResult};
use super::{ArticleId, AuthorId};
use serde::Serialize;
use uuid::Uuid;

/// Writer of articles.
///
/// `articles` holds back-references in insertion order; the catalog owns the
/// article records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Stable identity assigned at construction.
    id: AuthorId,
    /// Display name; non-empty.
    name: String,
    /// Back-references to written articles, oldest first.
    articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            articles: Vec::new(),
        })
    }

    /// Stable author identity.
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Immutable after construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of written articles, oldest first.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn link_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    pub(crate) fn unlink_article(&mut self, article: ArticleId) {
        self.articles.retain(|id| *id != article);
    }
}
