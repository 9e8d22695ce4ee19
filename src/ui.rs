//! Human-facing status lines.
//!
//! Everything here goes to stderr so stdout only carries the version.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::pipeline::{NextVersion, VersionSource};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line description of how the version was obtained.
pub fn describe_source(next: &NextVersion) -> String {
    match &next.source {
        VersionSource::Bumped { from_tag, bump } => {
            format!("{} bump from tag {} → {}", bump, from_tag, next.version)
        }
        VersionSource::NoBaselineTag => {
            format!("no version tag found, starting at {}", next.version)
        }
        VersionSource::Fallback { .. } => format!("using default version {}", next.version),
    }
}

/// Report the warnings and the outcome of a run.
pub fn display_outcome(next: &NextVersion) {
    for warning in &next.warnings {
        display_boundary_warning(warning);
    }
    if next.is_fallback() {
        display_status(&describe_source(next));
    } else {
        display_success(&describe_source(next));
    }
}
