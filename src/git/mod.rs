//! Git operations abstraction layer
//!
//! The version computation only needs two queries from version control:
//! listing tag names, and listing commit subjects after a tag. Both live on
//! the [Repository] trait so the computation can run against a real
//! repository or an in-memory one.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use next_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> next_version::Result<()> {
//! let tags = repo.list_tags()?;
//! if let Some(tag) = tags.first() {
//!     let subjects = repo.commit_subjects_since(tag)?;
//!     println!("{} commits since {}", subjects.len(), tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control queries used to compute the next version
///
/// Implementations map their underlying failures to
/// [crate::error::NextVersionError]; callers treat any error as the source
/// being unavailable.
pub trait Repository {
    /// List all tag names in the repository
    ///
    /// Order is unspecified.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// List commit subject lines after `tag` up to HEAD
    ///
    /// Covers commits reachable from HEAD but not from the commit `tag`
    /// points to (`tag..HEAD`). One subject per commit, order unspecified.
    fn commit_subjects_since(&self, tag: &str) -> Result<Vec<String>>;
}
