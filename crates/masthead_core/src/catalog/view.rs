//! Borrowed views that resolve id links against their catalog.
//!
//! # Invariants
//! - Set-valued queries return distinct items in first-appearance order.
//! - "No data" is reported as `None`, never as an empty `Vec`.

use super::Catalog;
use crate::model::{Article, Author, AuthorId, Magazine};
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::Deref;

/// Authors need strictly more than this many articles in one magazine to
/// count as contributing authors.
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Read-only author handle.
#[derive(Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    record: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub(super) fn new(catalog: &'a Catalog, record: &'a Author) -> Self {
        Self { catalog, record }
    }

    pub fn record(&self) -> &'a Author {
        self.record
    }

    /// Written articles in insertion order.
    pub fn articles(&self) -> Vec<ArticleView<'a>> {
        let catalog = self.catalog;
        self.record
            .article_ids()
            .iter()
            .filter_map(|id| catalog.article(*id))
            .collect()
    }

    /// Distinct magazines this author has written for.
    pub fn magazines(&self) -> Vec<MagazineView<'a>> {
        distinct_by(
            self.articles().into_iter().map(|article| article.magazine()),
            |magazine| magazine.id(),
        )
    }

    /// Distinct categories of the magazines written for.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self) -> Option<Vec<&'a str>> {
        if self.record.article_ids().is_empty() {
            return None;
        }
        let categories = self
            .magazines()
            .into_iter()
            .map(|magazine| magazine.record().category());
        Some(distinct_by(categories, |category| *category))
    }
}

impl Deref for AuthorView<'_> {
    type Target = Author;

    fn deref(&self) -> &Self::Target {
        self.record
    }
}

impl PartialEq for AuthorView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.id() == other.record.id()
    }
}

impl Eq for AuthorView<'_> {}

// Why: the catalog back-pointer would dump every record.
impl Debug for AuthorView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthorView").field(self.record).finish()
    }
}

/// Read-only magazine handle.
#[derive(Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    record: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub(super) fn new(catalog: &'a Catalog, record: &'a Magazine) -> Self {
        Self { catalog, record }
    }

    pub fn record(&self) -> &'a Magazine {
        self.record
    }

    /// Published articles in insertion order.
    pub fn articles(&self) -> Vec<ArticleView<'a>> {
        let catalog = self.catalog;
        self.record
            .article_ids()
            .iter()
            .filter_map(|id| catalog.article(*id))
            .collect()
    }

    /// Distinct authors published here.
    pub fn contributors(&self) -> Vec<AuthorView<'a>> {
        distinct_by(
            self.articles().into_iter().map(|article| article.author()),
            |author| author.id(),
        )
    }

    /// Titles in article order, or `None` when nothing is published.
    pub fn article_titles(&self) -> Option<Vec<&'a str>> {
        let articles = self.articles();
        if articles.is_empty() {
            return None;
        }
        Some(
            articles
                .into_iter()
                .map(|article| article.record().title())
                .collect(),
        )
    }

    /// Authors with more than [`CONTRIBUTING_AUTHOR_THRESHOLD`] articles here.
    ///
    /// Returns `None` when no author qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<AuthorView<'a>>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        let mut seen_order = Vec::new();
        for article in self.articles() {
            let count = counts.entry(article.author_id()).or_insert(0);
            if *count == 0 {
                seen_order.push(article.author());
            }
            *count += 1;
        }

        let contributing: Vec<AuthorView<'a>> = seen_order
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or(0) > CONTRIBUTING_AUTHOR_THRESHOLD
            })
            .collect();
        if contributing.is_empty() {
            None
        } else {
            Some(contributing)
        }
    }
}

impl Deref for MagazineView<'_> {
    type Target = Magazine;

    fn deref(&self) -> &Self::Target {
        self.record
    }
}

impl PartialEq for MagazineView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.id() == other.record.id()
    }
}

impl Eq for MagazineView<'_> {}

impl Debug for MagazineView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MagazineView").field(self.record).finish()
    }
}

/// Read-only article handle with resolved parents.
///
/// Both parents are resolved when the view is built, so an article whose
/// links do not resolve in this catalog never yields a view.
#[derive(Clone, Copy)]
pub struct ArticleView<'a> {
    catalog: &'a Catalog,
    record: &'a Article,
    author: &'a Author,
    magazine: &'a Magazine,
}

impl<'a> ArticleView<'a> {
    pub(super) fn new(catalog: &'a Catalog, record: &'a Article) -> Option<Self> {
        Some(Self {
            catalog,
            record,
            author: catalog.author_record(record.author_id())?,
            magazine: catalog.magazine_record(record.magazine_id())?,
        })
    }

    pub fn record(&self) -> &'a Article {
        self.record
    }

    pub fn author(&self) -> AuthorView<'a> {
        AuthorView::new(self.catalog, self.author)
    }

    pub fn magazine(&self) -> MagazineView<'a> {
        MagazineView::new(self.catalog, self.magazine)
    }
}

impl Deref for ArticleView<'_> {
    type Target = Article;

    fn deref(&self) -> &Self::Target {
        self.record
    }
}

impl PartialEq for ArticleView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.record.id() == other.record.id()
    }
}

impl Eq for ArticleView<'_> {}

impl Debug for ArticleView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ArticleView").field(self.record).finish()
    }
}

fn distinct_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::distinct_by;
    use crate::catalog::Catalog;

    #[test]
    fn distinct_by_keeps_first_appearance_order() {
        let values = distinct_by(["b", "a", "b", "c", "a"], |value| *value);
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn debug_output_shows_only_the_viewed_record() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Visible Author").unwrap();
        let hidden = catalog.create_author("Hidden Author").unwrap();
        let magazine = catalog.create_magazine("Mag", "Tech").unwrap();
        let article = catalog.add_article(author, magazine, "Shown title").unwrap();
        catalog.add_article(hidden, magazine, "Hidden title").unwrap();

        let author_debug = format!("{:?}", catalog.author(author).unwrap());
        assert!(author_debug.starts_with("AuthorView("));
        assert!(author_debug.contains("Visible Author"));
        assert!(!author_debug.contains("Hidden Author"));

        let article_debug = format!("{:?}", catalog.article(article).unwrap());
        assert!(article_debug.contains("Shown title"));
        assert!(!article_debug.contains("Hidden title"));
    }
}
