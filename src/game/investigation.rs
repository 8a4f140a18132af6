//! Investigation mechanics
//!
//! Decides who a clue points at and summarizes the case file.

use crate::data::*;
use serde::Serialize;

/// A keyword that ties a clue to one suspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub keyword: &'static str,
    pub suspect: &'static str,
}

/// Checked in order; the first keyword found in the clue wins
pub const RULES: &[Rule] = &[
    Rule {
        keyword: "Scarlett",
        suspect: "Miss Scarlett",
    },
    Rule {
        keyword: "J.B.",
        suspect: "Mr. Brown",
    },
    Rule {
        keyword: "blue fabric",
        suspect: "Mrs. Peacock",
    },
    Rule {
        keyword: "silver key",
        suspect: "Mr. Green",
    },
];

/// Suspects blamed when no rule matches
pub const DEFAULT_SUSPECTS: &[&str] = &["Mr. Brown", "Miss Scarlett"];

/// Suspects a clue implicates, in the order they should be linked
pub fn implicated_suspects(clue: &str) -> &'static [&'static str] {
    RULES
        .iter()
        .find(|rule| clue.contains(rule.keyword))
        .map(|rule| std::slice::from_ref(&rule.suspect))
        .unwrap_or(DEFAULT_SUSPECTS)
}

/// One line of the suspect report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspectSummary {
    pub name: String,
    pub clue_count: usize,
    pub clues: Vec<String>,
}

impl From<&Suspect> for SuspectSummary {
    fn from(suspect: &Suspect) -> Self {
        Self {
            name: suspect.name.clone(),
            clue_count: suspect.clue_count(),
            clues: suspect.clues().map(str::to_string).collect(),
        }
    }
}

/// Snapshot of the case: who is linked to what, and who looks guilty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub suspects: Vec<SuspectSummary>,
    pub prime_suspect: Option<SuspectSummary>,
}

impl CaseReport {
    pub fn from_registry(registry: &SuspectRegistry) -> Self {
        Self {
            suspects: registry.iter().map(SuspectSummary::from).collect(),
            prime_suspect: registry.most_likely().map(SuspectSummary::from),
        }
    }
}
