//! Core domain logic for Masthead.
//! Authors write articles for magazines; this crate owns every link between
//! them and the queries derived from those links.

pub mod catalog;
pub mod logging;
pub mod model;

pub use catalog::{ArticleView, AuthorView, Catalog, MagazineView};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::{
    Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ValidationError,
    ValidationResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
