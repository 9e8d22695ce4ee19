pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod pipeline;
pub mod ui;

pub use error::{NextVersionError, Result};
pub use pipeline::{compute, compute_or_default, NextVersion, VersionSource};
