use crate::domain::VersionBump;
use serde::{Deserialize, Serialize};

/// How a marker is matched against a commit subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Subject starts with the marker
    Prefix,
    /// Subject contains the marker anywhere
    Substring,
}

/// Named matching policy
///
/// - `Baseline`: `BREAKING CHANGE` anywhere → major, subject starting with
///   `feat` → minor, subject starting with `fix` → patch. Case-sensitive.
/// - `Extended`: case-insensitive substring match of `BREAKING CHANGE` or
///   `MAJOR` → major, `FEAT` or `MINOR` → minor, `FIX` or `PATCH` → patch.
///
/// The two policies can disagree: "docs: note minor typo" is a minor bump
/// under `Extended` and falls through to patch under `Baseline`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierPreset {
    #[default]
    Baseline,
    Extended,
}

/// A single classification rule: any marker matching any message selects `bump`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub bump: VersionBump,
    pub markers: Vec<String>,
    pub mode: MatchMode,
}

impl Rule {
    pub fn new(bump: VersionBump, markers: &[&str], mode: MatchMode) -> Self {
        Rule {
            bump,
            markers: markers.iter().map(|m| m.to_string()).collect(),
            mode,
        }
    }
}

/// Classifies commit subjects into a single version bump
///
/// Rules are checked in order and the first rule matched by any message wins,
/// so message order never changes the outcome. When no rule matches the
/// decision is `VersionBump::Patch`.
#[derive(Debug, Clone)]
pub struct CommitClassifier {
    rules: Vec<Rule>,
    case_sensitive: bool,
}

impl CommitClassifier {
    /// Create a classifier from explicit rules
    ///
    /// With `case_sensitive == false` markers and messages are compared
    /// after lower-casing both.
    pub fn new(rules: Vec<Rule>, case_sensitive: bool) -> Self {
        let rules = if case_sensitive {
            rules
        } else {
            rules
                .into_iter()
                .map(|rule| Rule {
                    markers: rule.markers.iter().map(|m| m.to_lowercase()).collect(),
                    ..rule
                })
                .collect()
        };

        CommitClassifier {
            rules,
            case_sensitive,
        }
    }

    /// Create a classifier for a named policy
    pub fn from_preset(preset: ClassifierPreset) -> Self {
        match preset {
            ClassifierPreset::Baseline => CommitClassifier::new(
                vec![
                    Rule::new(VersionBump::Major, &["BREAKING CHANGE"], MatchMode::Substring),
                    Rule::new(VersionBump::Minor, &["feat"], MatchMode::Prefix),
                    Rule::new(VersionBump::Patch, &["fix"], MatchMode::Prefix),
                ],
                true,
            ),
            ClassifierPreset::Extended => CommitClassifier::new(
                vec![
                    Rule::new(
                        VersionBump::Major,
                        &["BREAKING CHANGE", "MAJOR"],
                        MatchMode::Substring,
                    ),
                    Rule::new(VersionBump::Minor, &["FEAT", "MINOR"], MatchMode::Substring),
                    Rule::new(VersionBump::Patch, &["FIX", "PATCH"], MatchMode::Substring),
                ],
                false,
            ),
        }
    }

    /// Decide the version bump for a set of commit subjects
    pub fn classify<S: AsRef<str>>(&self, messages: &[S]) -> VersionBump {
        let messages: Vec<String> = messages
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| !m.is_empty())
            .map(|m| {
                if self.case_sensitive {
                    m.to_string()
                } else {
                    m.to_lowercase()
                }
            })
            .collect();

        for rule in &self.rules {
            if messages.iter().any(|message| rule_matches(rule, message)) {
                tracing::debug!(bump = %rule.bump, "commit rule matched");
                return rule.bump;
            }
        }

        tracing::debug!("no commit rule matched, falling back to patch");
        VersionBump::Patch
    }
}

impl Default for CommitClassifier {
    fn default() -> Self {
        CommitClassifier::from_preset(ClassifierPreset::default())
    }
}

fn rule_matches(rule: &Rule, message: &str) -> bool {
    rule.markers.iter().any(|marker| match rule.mode {
        MatchMode::Prefix => message.starts_with(marker.as_str()),
        MatchMode::Substring => message.contains(marker.as_str()),
    })
}
