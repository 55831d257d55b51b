//! Domain records for the author/magazine/article model.
//!
//! # Responsibility
//! - Define the three entity records and their validated constructors.
//! - Replace object back-references with stable ids.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` that is never reused.
//! - Records can only be created through `crate::catalog::Catalog`, which
//!   owns them and keeps both sides of every link in sync.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;

use uuid::Uuid;

/// Stable author identifier.
pub type AuthorId = Uuid;
/// Stable magazine identifier.
pub type MagazineId = Uuid;
/// Stable article identifier.
pub type ArticleId = Uuid;

pub use article::Article;
pub use author::Author;
pub use magazine::Magazine;
pub use validation::{ValidationError, ValidationResult};
