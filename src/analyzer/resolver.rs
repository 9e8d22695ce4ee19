use crate::domain::{TagFilter, Version};

/// Outcome of tag resolution: the baseline version and the tag it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    /// Greatest version tag, or `Version::DEFAULT` when none was found
    pub version: Version,
    /// Literal tag name, used as the lower bound for commit history
    pub tag: Option<String>,
}

impl ResolvedTag {
    /// Whether a version tag was found
    pub fn found(&self) -> bool {
        self.tag.is_some()
    }
}

/// Selects the highest version tag among raw tag names
///
/// Tags rejected by `filter` are dropped before comparison. If two tags name
/// the same version the first one seen wins; the resulting version is the
/// same either way.
pub fn resolve<S: AsRef<str>>(tags: &[S], filter: &TagFilter) -> ResolvedTag {
    let mut best: Option<(Version, &str)> = None;
    let mut rejected = 0usize;

    for tag in tags {
        let tag = tag.as_ref();
        match filter.accepts(tag) {
            Some(version) => {
                if best.map_or(true, |(current, _)| version > current) {
                    best = Some((version, tag));
                }
            }
            None => rejected += 1,
        }
    }

    tracing::debug!(total = tags.len(), rejected, "filtered version tags");

    match best {
        Some((version, tag)) => ResolvedTag {
            version,
            tag: Some(tag.to_string()),
        },
        None => ResolvedTag {
            version: Version::DEFAULT,
            tag: None,
        },
    }
}

/// Number of tags the filter rejects
pub fn count_rejected<S: AsRef<str>>(tags: &[S], filter: &TagFilter) -> usize {
    tags.iter()
        .filter(|tag| filter.accepts(tag.as_ref()).is_none())
        .count()
}
