use std::fmt;

/// Non-fatal conditions met while computing a version.
/// These never change the outcome's exit status but are reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The repository has tags, but none of them is a version tag
    NoValidTags { total: usize },
    /// Some tags were skipped because they are not version tags
    RejectedTags { count: usize },
    /// HEAD is at the latest version tag
    NoNewCommits { tag: String },
    /// The computation failed and the default version was used
    FellBack { reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoValidTags { total } => write!(
                f,
                "None of the {} tag(s) is a MAJOR.MINOR.PATCH version; starting from the default",
                total
            ),
            BoundaryWarning::RejectedTags { count } => {
                write!(f, "Skipped {} tag(s) that are not MAJOR.MINOR.PATCH", count)
            }
            BoundaryWarning::NoNewCommits { tag } => {
                write!(f, "No new commits since tag '{}'; bumping patch", tag)
            }
            BoundaryWarning::FellBack { reason } => {
                write!(f, "Could not compute version ({}); using default", reason)
            }
        }
    }
}
