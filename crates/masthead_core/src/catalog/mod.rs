//! Owning registry for authors, magazines and articles.
//!
//! # Responsibility
//! - Own every entity record for its lifetime and hand out borrowed views.
//! - Keep author/magazine back-reference lists in sync with article links.
//! - Answer catalog-wide queries such as `top_publisher`.
//!
//! # Invariants
//! - Every article id appears in exactly one author's list and exactly one
//!   magazine's list at all times.
//! - A failed call has no side effect: all validation runs before the first
//!   mutation.
//! - Records are never removed; creation order is preserved per kind.

mod view;

pub use view::{ArticleView, AuthorView, MagazineView, CONTRIBUTING_AUTHOR_THRESHOLD};

use crate::model::{
    Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError,
    ValidationResult,
};
use log::debug;
use std::collections::HashMap;

/// Explicitly owned replacement for process-wide entity registries.
///
/// Callers construct one catalog and thread it through; separate catalogs
/// never observe each other's records.
#[derive(Debug, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    author_index: HashMap<AuthorId, usize>,
    magazine_index: HashMap<MagazineId, usize>,
    article_index: HashMap<ArticleId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new author.
    ///
    /// # Errors
    /// - `EmptyAuthorName` when `name` is empty.
    pub fn create_author(&mut self, name: impl Into<String>) -> ValidationResult<AuthorId> {
        let author = Author::new(name)?;
        let id = author.id();
        self.author_index.insert(id, self.authors.len());
        self.authors.push(author);
        debug!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    /// Registers a new magazine.
    ///
    /// # Errors
    /// - `MagazineNameLength` when `name` is outside [2, 16] characters.
    /// - `EmptyCategory` when `category` is empty.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazine_index.insert(id, self.magazines.len());
        self.magazines.push(magazine);
        debug!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    /// Creates an article and appends it to both parents' lists.
    ///
    /// # Errors
    /// - `UnknownAuthor` / `UnknownMagazine` when an id is not registered here.
    /// - `TitleLength` when `title` is outside [5, 50] characters.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<ArticleId> {
        let author_pos = self.author_position(author)?;
        let magazine_pos = self.magazine_position(magazine)?;
        let article = Article::new(author, magazine, title)?;
        let id = article.id();

        self.authors[author_pos].link_article(id);
        self.magazines[magazine_pos].link_article(id);
        self.article_index.insert(id, self.articles.len());
        self.articles.push(article);
        debug!(
            "event=article_create module=catalog status=ok article_id={id} author_id={author} magazine_id={magazine}"
        );
        Ok(id)
    }

    /// Author-side entry point for writing into a magazine.
    ///
    /// Same contract as [`Catalog::create_article`].
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /// Moves an article to another author.
    ///
    /// Rebinding to the current author is a no-op and keeps list order.
    pub fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> ValidationResult<()> {
        let article_pos = self.article_position(article)?;
        let new_pos = self.author_position(author)?;
        let old = self.articles[article_pos].author_id();
        if old == author {
            return Ok(());
        }
        let old_pos = self.author_position(old)?;

        self.authors[old_pos].unlink_article(article);
        self.authors[new_pos].link_article(article);
        self.articles[article_pos].set_author(author);
        debug!(
            "event=article_reassign_author module=catalog status=ok article_id={article} from={old} to={author}"
        );
        Ok(())
    }

    /// Moves an article to another magazine.
    ///
    /// Rebinding to the current magazine is a no-op and keeps list order.
    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> ValidationResult<()> {
        let article_pos = self.article_position(article)?;
        let new_pos = self.magazine_position(magazine)?;
        let old = self.articles[article_pos].magazine_id();
        if old == magazine {
            return Ok(());
        }
        let old_pos = self.magazine_position(old)?;

        self.magazines[old_pos].unlink_article(article);
        self.magazines[new_pos].link_article(article);
        self.articles[article_pos].set_magazine(magazine);
        debug!(
            "event=article_reassign_magazine module=catalog status=ok article_id={article} from={old} to={magazine}"
        );
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Option<AuthorView<'_>> {
        self.author_record(id)
            .map(|record| AuthorView::new(self, record))
    }

    pub fn magazine(&self, id: MagazineId) -> Option<MagazineView<'_>> {
        self.magazine_record(id)
            .map(|record| MagazineView::new(self, record))
    }

    pub fn article(&self, id: ArticleId) -> Option<ArticleView<'_>> {
        self.article_record(id)
            .and_then(|record| ArticleView::new(self, record))
    }

    /// Renames a magazine using the construction rules.
    ///
    /// # Errors
    /// - `UnknownMagazine` when `id` is not registered here.
    /// - `MagazineNameLength` when `name` is outside [2, 16] characters; the
    ///   previous name is kept.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> ValidationResult<()> {
        let pos = self.magazine_position(id)?;
        self.magazines[pos].set_name(name)
    }

    /// Recategorizes a magazine using the construction rules.
    ///
    /// # Errors
    /// - `UnknownMagazine` when `id` is not registered here.
    /// - `EmptyCategory` when `category` is empty; the previous category is
    ///   kept.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> ValidationResult<()> {
        let pos = self.magazine_position(id)?;
        self.magazines[pos].set_category(category)
    }

    /// All authors in creation order.
    pub fn authors(&self) -> impl Iterator<Item = AuthorView<'_>> + '_ {
        self.authors
            .iter()
            .map(move |record| AuthorView::new(self, record))
    }

    /// All magazines in creation order.
    pub fn magazines(&self) -> impl Iterator<Item = MagazineView<'_>> + '_ {
        self.magazines
            .iter()
            .map(move |record| MagazineView::new(self, record))
    }

    /// All articles in creation order.
    pub fn articles(&self) -> impl Iterator<Item = ArticleView<'_>> + '_ {
        self.articles
            .iter()
            .filter_map(move |record| ArticleView::new(self, record))
    }

    /// Returns the magazine with the most articles.
    ///
    /// Ties resolve to the earliest-created magazine. Returns `None` when no
    /// magazine exists or none has published anything.
    pub fn top_publisher(&self) -> Option<MagazineView<'_>> {
        let mut top: Option<&Magazine> = None;
        for magazine in &self.magazines {
            let count = magazine.article_ids().len();
            if count > top.map_or(0, |best| best.article_ids().len()) {
                top = Some(magazine);
            }
        }
        top.map(|record| MagazineView::new(self, record))
    }

    pub(crate) fn author_record(&self, id: AuthorId) -> Option<&Author> {
        self.author_index
            .get(&id)
            .and_then(|pos| self.authors.get(*pos))
    }

    pub(crate) fn magazine_record(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazine_index
            .get(&id)
            .and_then(|pos| self.magazines.get(*pos))
    }

    pub(crate) fn article_record(&self, id: ArticleId) -> Option<&Article> {
        self.article_index
            .get(&id)
            .and_then(|pos| self.articles.get(*pos))
    }

    fn author_position(&self, id: AuthorId) -> ValidationResult<usize> {
        self.author_index
            .get(&id)
            .copied()
            .ok_or(ValidationError::UnknownAuthor(id))
    }

    fn magazine_position(&self, id: MagazineId) -> ValidationResult<usize> {
        self.magazine_index
            .get(&id)
            .copied()
            .ok_or(ValidationError::UnknownMagazine(id))
    }

    fn article_position(&self, id: ArticleId) -> ValidationResult<usize> {
        self.article_index
            .get(&id)
            .copied()
            .ok_or(ValidationError::UnknownArticle(id))
    }
}
