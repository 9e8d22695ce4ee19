use crate::error::{NextVersionError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    tags: Vec<String>,
    subjects: HashMap<String, Vec<String>>,
    fail_tags: bool,
    fail_log: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) -> &mut Self {
        self.tags.push(name.into());
        self
    }

    /// Set the commit subjects reported after `tag`
    pub fn set_subjects_since<I, S>(&mut self, tag: impl Into<String>, subjects: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects
            .insert(tag.into(), subjects.into_iter().map(Into::into).collect());
        self
    }

    /// Make `list_tags` fail
    pub fn fail_tag_listing(&mut self) -> &mut Self {
        self.fail_tags = true;
        self
    }

    /// Make `commit_subjects_since` fail
    pub fn fail_commit_log(&mut self) -> &mut Self {
        self.fail_log = true;
        self
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_tags {
            return Err(NextVersionError::source_unavailable("tag listing failed"));
        }
        Ok(self.tags.clone())
    }

    fn commit_subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        if self.fail_log {
            return Err(NextVersionError::source_unavailable("commit log failed"));
        }
        Ok(self.subjects.get(tag).cloned().unwrap_or_default())
    }
}
