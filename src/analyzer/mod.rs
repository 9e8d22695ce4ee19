//! Analysis engine: tag resolution and commit classification

pub mod classifier;
pub mod resolver;

pub use classifier::{ClassifierPreset, CommitClassifier, MatchMode, Rule};
pub use resolver::{resolve, ResolvedTag};
