//! Magazine record.
//!
//! # Invariants
//! - `name` length stays within [2, 16] characters.
//! - `category` stays non-empty.
//! - A rejected setter call leaves the previous value in place.
//!
//! # See also
//! - `crate::catalog::Catalog::rename_magazine`

use super::validation::{validate_category, validate_magazine_name, ValidationResult};
use super::{ArticleId, MagazineId};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

/// Publication that collects articles under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    /// Stable identity assigned at construction.
    id: MagazineId,
    /// Display name of 2 to 16 characters.
    name: String,
    /// Topic area reported by `AuthorView::topic_areas`; non-empty.
    category: String,
    /// Back-references to published articles, oldest first.
    articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
            articles: Vec::new(),
        })
    }

    /// Stable magazine identity.
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// Current name; changes only through `Catalog::rename_magazine`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current category; changes only through
    /// `Catalog::recategorize_magazine`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ids of published articles, oldest first.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Renames the magazine using the construction rules.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        debug!(
            "event=magazine_rename module=model status=ok magazine_id={}",
            self.id
        );
        Ok(())
    }

    /// Recategorizes the magazine using the construction rules.
    pub(crate) fn set_category(&mut self, category: impl Into<String>) -> ValidationResult<()> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        debug!(
            "event=magazine_recategorize module=model status=ok magazine_id={}",
            self.id
        );
        Ok(())
    }

    pub(crate) fn link_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    pub(crate) fn unlink_article(&mut self, article: ArticleId) {
        self.articles.retain(|id| *id != article);
    }
}
