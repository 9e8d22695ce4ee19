use crate::domain::Version;
use regex::Regex;
use std::sync::LazyLock;

static SEMVER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid tag regex"));

static YEAR_PREFIXED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^20\d{2}\.").expect("valid year regex"));

/// Decides which raw tag names count as version tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Also reject date-like tags such as `2024.01.01`
    pub exclude_year_prefixed: bool,
}

impl TagFilter {
    /// Create a filter
    pub fn new(exclude_year_prefixed: bool) -> Self {
        TagFilter {
            exclude_year_prefixed,
        }
    }

    /// Returns the version a tag names, or `None` if the tag is not a version tag
    pub fn accepts(&self, tag: &str) -> Option<Version> {
        if !SEMVER_TAG.is_match(tag) {
            return None;
        }
        if self.exclude_year_prefixed && YEAR_PREFIXED_TAG.is_match(tag) {
            return None;
        }
        Version::parse(tag).ok()
    }
}
