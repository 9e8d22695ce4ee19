//! Version computation workflow
//!
//! Runs the steps strictly in sequence: list tags, resolve the baseline tag,
//! read commit subjects since that tag, classify them, bump. Any failure
//! aborts the remaining steps; [compute_or_default] turns it into the
//! default version so the caller always has something to emit.

use crate::analyzer::{resolver, CommitClassifier};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{TagFilter, Version, VersionBump};
use crate::error::Result;
use crate::git::Repository;

/// How the emitted version was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Bumped from an existing version tag
    Bumped { from_tag: String, bump: VersionBump },
    /// No version tag exists; the default version is the first release
    NoBaselineTag,
    /// The computation failed; the default version stands in
    Fallback { reason: String },
}

/// Result of a run: the version to emit and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    pub version: Version,
    pub source: VersionSource,
    pub warnings: Vec<BoundaryWarning>,
}

impl NextVersion {
    /// The default version standing in for a failed computation
    pub fn fallback(reason: impl ToString) -> Self {
        let reason = reason.to_string();
        NextVersion {
            version: Version::DEFAULT,
            warnings: vec![BoundaryWarning::FellBack {
                reason: reason.clone(),
            }],
            source: VersionSource::Fallback { reason },
        }
    }

    /// Whether the default version was used because of a failure
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, VersionSource::Fallback { .. })
    }
}

/// Computes the next version, propagating any source or arithmetic error
pub fn compute<R: Repository>(repo: &R, config: &Config) -> Result<NextVersion> {
    let filter = TagFilter::new(config.tags.exclude_year_prefixed);
    let classifier = CommitClassifier::from_preset(config.classifier.preset);
    let mut warnings = Vec::new();

    let tags = repo.list_tags()?;
    let resolved = resolver::resolve(&tags, &filter);

    let from_tag = match resolved.tag {
        Some(tag) => tag,
        None => {
            if !tags.is_empty() {
                warnings.push(BoundaryWarning::NoValidTags { total: tags.len() });
            }
            tracing::info!(version = %resolved.version, "no version tag found");
            return Ok(NextVersion {
                version: resolved.version,
                source: VersionSource::NoBaselineTag,
                warnings,
            });
        }
    };

    let rejected = resolver::count_rejected(&tags, &filter);
    if rejected > 0 {
        warnings.push(BoundaryWarning::RejectedTags { count: rejected });
    }

    let subjects = repo.commit_subjects_since(&from_tag)?;
    if subjects.iter().all(|s| s.is_empty()) {
        warnings.push(BoundaryWarning::NoNewCommits {
            tag: from_tag.clone(),
        });
    }

    let bump = classifier.classify(&subjects);
    let version = resolved.version.bump(bump)?;
    tracing::info!(
        tag = %from_tag,
        commits = subjects.len(),
        %bump,
        %version,
        "computed next version"
    );

    Ok(NextVersion {
        version,
        source: VersionSource::Bumped { from_tag, bump },
        warnings,
    })
}

/// Computes the next version, or the default version if anything fails
pub fn compute_or_default<R: Repository>(repo: &R, config: &Config) -> NextVersion {
    compute(repo, config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "version computation failed");
        NextVersion::fallback(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ClassifierPreset;
    use crate::git::MockRepository;

    fn run(tags: &[&str], subjects: &[&str]) -> NextVersion {
        let mut repo = MockRepository::new();
        for tag in tags {
            repo.add_tag(*tag).set_subjects_since(*tag, subjects.iter().copied());
        }
        compute_or_default(&repo, &Config::default())
    }

    #[test]
    fn test_no_tags() {
        let next = run(&[], &[]);
        assert_eq!(next.version.to_string(), "1.0.0");
        assert_eq!(next.source, VersionSource::NoBaselineTag);
        assert!(next.warnings.is_empty());
    }

    #[test]
    fn test_fix_after_latest() {
        let next = run(&["1.2.3", "1.3.0"], &["fix: typo"]);
        assert_eq!(next.version.to_string(), "1.3.1");
        assert_eq!(
            next.source,
            VersionSource::Bumped {
                from_tag: "1.3.0".to_string(),
                bump: VersionBump::Patch
            }
        );
    }

    #[test]
    fn test_feature_bumps_minor() {
        assert_eq!(run(&["0.9.0"], &["feat: add login"]).version.to_string(), "0.10.0");
    }

    #[test]
    fn test_breaking_change_bumps_major() {
        let next = run(
            &["2.5.1"],
            &["refactor: cleanup", "BREAKING CHANGE: remove old API"],
        );
        assert_eq!(next.version.to_string(), "3.0.0");
    }

    #[test]
    fn test_unmatched_commits_bump_patch() {
        assert_eq!(run(&["1.0.0"], &["chore: update deps"]).version.to_string(), "1.0.1");
    }

    #[test]
    fn test_duplicate_tags() {
        assert_eq!(run(&["1.0.0", "1.0.0"], &["fix: x"]).version.to_string(), "1.0.1");
    }

    #[test]
    fn test_no_commits_since_tag_bumps_patch() {
        let next = run(&["1.4.2"], &[]);
        assert_eq!(next.version.to_string(), "1.4.3");
        assert!(next.warnings.contains(&BoundaryWarning::NoNewCommits {
            tag: "1.4.2".to_string()
        }));
    }

    #[test]
    fn test_only_invalid_tags_warns() {
        let next = run(&["v1.0.0", "nightly"], &[]);
        assert_eq!(next.version, Version::DEFAULT);
        assert_eq!(next.source, VersionSource::NoBaselineTag);
        assert_eq!(next.warnings, vec![BoundaryWarning::NoValidTags { total: 2 }]);
    }

    #[test]
    fn test_rejected_tags_warn() {
        let next = run(&["1.0.0", "1.1.0-rc1"], &["feat: x"]);
        assert_eq!(next.version.to_string(), "1.1.0");
        assert!(next
            .warnings
            .contains(&BoundaryWarning::RejectedTags { count: 1 }));
    }

    #[test]
    fn test_tag_listing_failure_falls_back() {
        let mut repo = MockRepository::new();
        repo.add_tag("3.0.0").fail_tag_listing();

        let next = compute_or_default(&repo, &Config::default());
        assert!(next.is_fallback());
        assert_eq!(next.version, Version::new(1, 0, 0));
        assert!(compute(&repo, &Config::default()).is_err());
    }

    #[test]
    fn test_commit_log_failure_falls_back() {
        let mut repo = MockRepository::new();
        repo.add_tag("3.0.0").fail_commit_log();

        let next = compute_or_default(&repo, &Config::default());
        assert!(next.is_fallback());
        assert_eq!(next.version.to_string(), "1.0.0");
    }

    #[test]
    fn test_overflow_falls_back() {
        let max = format!("{}.0.0", u64::MAX);
        let mut repo = MockRepository::new();
        repo.add_tag(max.clone())
            .set_subjects_since(max, ["BREAKING CHANGE: again"]);

        let next = compute_or_default(&repo, &Config::default());
        assert!(next.is_fallback());
        assert_eq!(next.version, Version::DEFAULT);
    }

    #[test]
    fn test_config_selects_year_filter_and_preset() {
        let mut repo = MockRepository::new();
        repo.add_tag("2024.01.01")
            .add_tag("1.2.0")
            .set_subjects_since("1.2.0", ["docs: minor wording"])
            .set_subjects_since("2024.01.01", ["fix: x"]);

        let mut config = Config::default();
        assert_eq!(compute_or_default(&repo, &config).version.to_string(), "2024.1.2");

        config.tags.exclude_year_prefixed = true;
        assert_eq!(compute_or_default(&repo, &config).version.to_string(), "1.2.1");

        config.classifier.preset = ClassifierPreset::Extended;
        assert_eq!(compute_or_default(&repo, &config).version.to_string(), "1.3.0");
    }
}
