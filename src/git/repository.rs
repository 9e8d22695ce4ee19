use crate::error::{NextVersionError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            NextVersionError::source_unavailable(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commit_subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        let reference_name = format!("refs/tags/{}", tag);

        let tag_commit = match self.repo.find_reference(&reference_name) {
            Ok(reference) => reference.peel_to_commit().map_err(|e| {
                NextVersionError::source_unavailable(format!(
                    "Tag '{}' does not point to a commit: {}",
                    tag,
                    e.message()
                ))
            })?,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(NextVersionError::source_unavailable(format!(
                    "Tag '{}' not found",
                    tag
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.hide(tag_commit.id())?;

        let mut subjects = Vec::new();
        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;
            let subject = commit
                .summary_bytes()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default();
            subjects.push(subject);
        }

        Ok(subjects)
    }
}
